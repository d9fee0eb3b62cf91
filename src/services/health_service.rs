use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the service status and the size of both match stores.
pub fn health_status(state: &SharedState) -> HealthResponse {
    let active = state.active().len();
    let completed = state.rankings().len();
    debug!(active, completed, "health check");
    HealthResponse::ok(active, completed)
}
