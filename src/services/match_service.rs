//! Service helpers driving a match through its lifecycle: started, scored, finished.

use tracing::{info, warn};

use crate::{
    dto::matches::MatchSummary,
    error::ServiceError,
    state::{MatchId, SharedState},
};

/// Register a new goalless match between two known teams.
pub fn start_match(
    state: &SharedState,
    home_team: &str,
    away_team: &str,
) -> Result<MatchId, ServiceError> {
    match state.active().start(home_team, away_team) {
        Ok(id) => {
            info!(match_id = id, home_team, away_team, "match started");
            Ok(id)
        }
        Err(err) => {
            warn!(error = %err, home_team, away_team, "rejected match start");
            Err(err.into())
        }
    }
}

/// Replace the score of an active match and return its new state.
pub fn update_score(
    state: &SharedState,
    id: MatchId,
    home_score: u32,
    away_score: u32,
) -> Result<MatchSummary, ServiceError> {
    match state.active().update(id, home_score, away_score) {
        Ok(game) => {
            info!(match_id = id, home_score, away_score, "score updated");
            Ok(game.into())
        }
        Err(err) => {
            warn!(error = %err, match_id = id, "rejected score update");
            Err(err.into())
        }
    }
}

/// Close an active match and move it into the ranking.
pub fn finish_match(state: &SharedState, id: MatchId) -> Result<MatchSummary, ServiceError> {
    let game = state.active().remove(id).map_err(|err| {
        warn!(error = %err, match_id = id, "rejected match finish");
        ServiceError::from(err)
    })?;

    let summary = MatchSummary::from(&game);
    state.rankings().insert(game);
    info!(
        match_id = id,
        total_score = summary.total_score,
        "match finished and ranked"
    );
    Ok(summary)
}

/// Matches in progress, ordered by identifier so the board reads in start order.
pub fn active_matches(state: &SharedState) -> Vec<MatchSummary> {
    let mut matches: Vec<MatchSummary> = state
        .active()
        .list()
        .into_iter()
        .map(MatchSummary::from)
        .collect();
    matches.sort_unstable_by_key(|summary| summary.id);
    matches
}

/// Finished matches, highest total first, newest first among ties.
pub fn ranked_matches(state: &SharedState) -> Vec<MatchSummary> {
    state
        .rankings()
        .list()
        .into_iter()
        .map(MatchSummary::from)
        .collect()
}
