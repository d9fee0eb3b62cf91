use serde::Serialize;
use utoipa::ToSchema;

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" while the process serves requests.
    pub status: String,
    /// Number of matches currently in progress.
    pub active_matches: usize,
    /// Number of matches in the ranking.
    pub completed_matches: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(active_matches: usize, completed_matches: usize) -> Self {
        Self {
            status: "ok".to_string(),
            active_matches,
            completed_matches,
        }
    }
}
