use axum::Router;

use crate::state::SharedState;

/// HTML board page and form targets.
pub mod board;
/// Swagger UI.
pub mod docs;
/// Health check.
pub mod health;
/// Match JSON API.
pub mod matches;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    health::router()
        .merge(board::router())
        .merge(matches::router())
        .merge(docs::router())
        .with_state(state)
}
