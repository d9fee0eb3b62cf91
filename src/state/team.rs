use std::{fmt, str::FromStr};

use serde::Serialize;
use utoipa::ToSchema;

use crate::state::MatchError;

/// Closed set of national teams that can take part in a match.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Team {
    Argentina,
    Australia,
    Brazil,
    Canada,
    China,
    Denmark,
    Egypt,
    France,
    Germany,
    India,
    Indonesia,
    Italy,
    Japan,
    Morocco,
    Nigeria,
    Poland,
    #[serde(rename = "South Africa")]
    SouthAfrica,
    Spain,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "USA")]
    Usa,
}

impl Team {
    /// Every known team, in the order they are offered to users.
    pub const ALL: [Team; 20] = [
        Team::Argentina,
        Team::Australia,
        Team::Brazil,
        Team::Canada,
        Team::China,
        Team::Denmark,
        Team::Egypt,
        Team::France,
        Team::Germany,
        Team::India,
        Team::Indonesia,
        Team::Italy,
        Team::Japan,
        Team::Morocco,
        Team::Nigeria,
        Team::Poland,
        Team::SouthAfrica,
        Team::Spain,
        Team::Uk,
        Team::Usa,
    ];

    /// Display name, which is also the only accepted spelling when parsing.
    pub fn name(self) -> &'static str {
        match self {
            Team::Argentina => "Argentina",
            Team::Australia => "Australia",
            Team::Brazil => "Brazil",
            Team::Canada => "Canada",
            Team::China => "China",
            Team::Denmark => "Denmark",
            Team::Egypt => "Egypt",
            Team::France => "France",
            Team::Germany => "Germany",
            Team::India => "India",
            Team::Indonesia => "Indonesia",
            Team::Italy => "Italy",
            Team::Japan => "Japan",
            Team::Morocco => "Morocco",
            Team::Nigeria => "Nigeria",
            Team::Poland => "Poland",
            Team::SouthAfrica => "South Africa",
            Team::Spain => "Spain",
            Team::Uk => "UK",
            Team::Usa => "USA",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Team {
    type Err = MatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Team::ALL
            .into_iter()
            .find(|team| team.name() == value)
            .ok_or_else(|| MatchError::InvalidTeam(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_display_name() {
        for team in Team::ALL {
            assert_eq!(team.name().parse::<Team>().unwrap(), team);
        }
    }

    #[test]
    fn rejects_unknown_and_empty_names() {
        assert!(matches!(
            "Norway".parse::<Team>(),
            Err(MatchError::InvalidTeam(name)) if name == "Norway"
        ));
        assert!("".parse::<Team>().is_err());
        assert!("usa".parse::<Team>().is_err()); // case sensitive
        assert!("SouthAfrica".parse::<Team>().is_err());
    }

    #[test]
    fn serializes_with_display_name() {
        let json = serde_json::to_string(&Team::SouthAfrica).unwrap();
        assert_eq!(json, "\"South Africa\"");
    }
}
