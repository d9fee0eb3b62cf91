/// Match entity and score pair.
pub mod game;
/// Finished matches ranked by total score.
pub mod ranking;
/// Matches in progress.
pub mod registry;
/// Known national teams.
pub mod team;

use std::sync::Arc;

pub use self::game::{Match, MatchId, Score};
pub use self::ranking::RankingStore;
pub use self::registry::{ActiveRegistry, MatchError};
pub use self::team::Team;

/// Cheaply clonable handle shared by every request handler.
pub type SharedState = Arc<AppState>;

/// Central application state holding the live and finished match stores.
#[derive(Debug, Default)]
pub struct AppState {
    active: ActiveRegistry,
    rankings: RankingStore,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new() -> SharedState {
        Arc::new(Self::default())
    }

    /// Matches currently in progress.
    pub fn active(&self) -> &ActiveRegistry {
        &self.active
    }

    /// Finished matches in ranked order.
    pub fn rankings(&self) -> &RankingStore {
        &self.rankings
    }
}
