use crate::state::team::Team;

/// Identifier handed out by the active match registry.
pub type MatchId = u64;

/// Home and away goals, always replaced together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Goals scored by the home team.
    pub home: u32,
    /// Goals scored by the away team.
    pub away: u32,
}

impl Score {
    /// Build a score pair.
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Sum of both sides, widened so it cannot overflow.
    pub fn total(self) -> u64 {
        u64::from(self.home) + u64::from(self.away)
    }
}

/// A match between two teams.
///
/// The identity (`id` and both teams) is fixed at creation; only the score changes, and
/// only while the match is held by the active registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    id: MatchId,
    home_team: Team,
    away_team: Team,
    score: Score,
}

impl Match {
    /// Create a fresh match with a 0:0 score.
    pub fn new(id: MatchId, home_team: Team, away_team: Team) -> Self {
        Self {
            id,
            home_team,
            away_team,
            score: Score::default(),
        }
    }

    /// Registry-assigned identifier.
    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Team playing at home.
    pub fn home_team(&self) -> Team {
        self.home_team
    }

    /// Visiting team.
    pub fn away_team(&self) -> Team {
        self.away_team
    }

    /// Current score pair.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Total goals, derived from the current score.
    pub fn total_score(&self) -> u64 {
        self.score.total()
    }

    pub(crate) fn set_score(&mut self, score: Score) {
        self.score = score;
    }

    #[cfg(test)]
    pub(crate) fn with_score(mut self, home: u32, away: u32) -> Self {
        self.score = Score::new(home, away);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_starts_goalless() {
        let game = Match::new(7, Team::Spain, Team::Brazil);
        assert_eq!(game.id(), 7);
        assert_eq!(game.score(), Score::new(0, 0));
        assert_eq!(game.total_score(), 0);
    }

    #[test]
    fn total_follows_score_updates() {
        let mut game = Match::new(1, Team::Germany, Team::France);
        game.set_score(Score::new(2, 3));
        assert_eq!(game.total_score(), 5);
        game.set_score(Score::new(1, 0));
        assert_eq!(game.total_score(), 1);
    }

    #[test]
    fn total_does_not_overflow() {
        let game = Match::new(1, Team::Italy, Team::Usa).with_score(u32::MAX, u32::MAX);
        assert_eq!(game.total_score(), 2 * u64::from(u32::MAX));
    }
}
