use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;

use crate::state::{
    game::{Match, MatchId, Score},
    team::Team,
};

/// Failures reported by the match stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Team name is empty or not part of the known set.
    #[error("invalid team `{0}`")]
    InvalidTeam(String),
    /// No active match carries this identifier.
    #[error("match `{0}` not found")]
    NotFound(MatchId),
}

/// Matches currently in progress, keyed by their identifier.
///
/// Each entry is guarded by its map shard, so an update replaces both scores under one write
/// lock and listings only ever clone whole entries. Operations on different ids proceed in
/// parallel unless they happen to share a shard.
#[derive(Debug, Default)]
pub struct ActiveRegistry {
    next_id: AtomicU64,
    matches: DashMap<MatchId, Match>,
}

impl ActiveRegistry {
    /// Create an empty registry whose first assigned id is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate both team names and register a goalless match between them.
    ///
    /// Ids are only consumed once validation passed; they are never handed out twice, even
    /// after the match has been removed.
    pub fn start(&self, home_team: &str, away_team: &str) -> Result<MatchId, MatchError> {
        let home_team: Team = home_team.parse()?;
        let away_team: Team = away_team.parse()?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.matches
            .insert(id, Match::new(id, home_team, away_team));
        debug!(match_id = id, %home_team, %away_team, "registered active match");
        Ok(id)
    }

    /// Replace both scores of an active match and return it as written.
    ///
    /// The snapshot is taken under the same entry lock as the write, so it reflects exactly
    /// this update even if another caller updates or removes the match right after.
    pub fn update(
        &self,
        id: MatchId,
        home_score: u32,
        away_score: u32,
    ) -> Result<Match, MatchError> {
        let mut entry = self.matches.get_mut(&id).ok_or(MatchError::NotFound(id))?;
        entry.set_score(Score::new(home_score, away_score));
        Ok(entry.value().clone())
    }

    /// Take a match out of the registry, handing ownership to the caller.
    ///
    /// Concurrent removals of the same id race on the shard lock; exactly one of them gets
    /// the match and the others see [`MatchError::NotFound`].
    pub fn remove(&self, id: MatchId) -> Result<Match, MatchError> {
        self.matches
            .remove(&id)
            .map(|(_, game)| game)
            .ok_or(MatchError::NotFound(id))
    }

    /// Snapshot of a single active match.
    pub fn get(&self, id: MatchId) -> Result<Match, MatchError> {
        self.matches
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(MatchError::NotFound(id))
    }

    /// Snapshot of every active match, in no particular order.
    pub fn list(&self) -> Vec<Match> {
        self.matches
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Number of active matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match is in progress.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
