//! DTO definitions used by the match JSON API and documentation layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::{Match, MatchId, Team};

/// Payload used to start a new match.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StartMatchRequest {
    /// Display name of the home team (e.g. "South Africa").
    pub home_team: String,
    /// Display name of the away team.
    pub away_team: String,
}

/// Identifier assigned to a freshly started match.
#[derive(Debug, Serialize, ToSchema)]
pub struct StartMatchResponse {
    /// Identifier of the new match.
    pub id: MatchId,
}

/// Replacement score for an active match.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreUpdateRequest {
    /// New home score.
    pub home_score: u32,
    /// New away score.
    pub away_score: u32,
}

/// Public projection of a match, active or finished.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct MatchSummary {
    /// Registry-assigned identifier.
    pub id: MatchId,
    /// Team playing at home.
    pub home_team: Team,
    /// Visiting team.
    pub away_team: Team,
    /// Home goals.
    pub home_score: u32,
    /// Away goals.
    pub away_score: u32,
    /// Sum of both scores.
    pub total_score: u64,
}

impl From<&Match> for MatchSummary {
    fn from(game: &Match) -> Self {
        let score = game.score();
        Self {
            id: game.id(),
            home_team: game.home_team(),
            away_team: game.away_team(),
            home_score: score.home,
            away_score: score.away,
            total_score: game.total_score(),
        }
    }
}

impl From<Match> for MatchSummary {
    fn from(game: Match) -> Self {
        (&game).into()
    }
}
