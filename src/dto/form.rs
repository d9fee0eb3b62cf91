//! Form payloads posted by the HTML board.
//!
//! Every field is taken as raw text so that a missing or malformed value can be reported
//! with a message naming the field instead of a generic extractor rejection.

use serde::Deserialize;

/// `POST /start_game`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StartGameForm {
    /// Home team name.
    pub country1: String,
    /// Away team name.
    pub country2: String,
}

/// `POST /update_score`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateScoreForm {
    /// Identifier of the active match.
    #[serde(rename = "matchIndex")]
    pub match_index: String,
    /// New home score.
    pub score1: String,
    /// New away score.
    pub score2: String,
}

/// `POST /end_game`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EndGameForm {
    /// Identifier of the active match.
    #[serde(rename = "matchIndex")]
    pub match_index: String,
}
