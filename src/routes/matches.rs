use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};

use crate::{
    dto::matches::{MatchSummary, ScoreUpdateRequest, StartMatchRequest, StartMatchResponse},
    error::AppError,
    services::match_service,
    state::{MatchId, SharedState},
};

/// JSON endpoints mirroring the board operations.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/matches", get(list_active).post(start_match))
        .route("/matches/{id}/score", put(update_score))
        .route("/matches/{id}/finish", post(finish_match))
        .route("/rankings", get(list_rankings))
}

/// List matches currently in progress.
#[utoipa::path(
    get,
    path = "/matches",
    tag = "matches",
    responses((status = 200, description = "Active matches", body = [MatchSummary]))
)]
pub async fn list_active(State(state): State<SharedState>) -> Json<Vec<MatchSummary>> {
    Json(match_service::active_matches(&state))
}

/// Start a goalless match between two known teams.
#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    request_body = StartMatchRequest,
    responses(
        (status = 201, description = "Match started", body = StartMatchResponse),
        (status = 400, description = "Unknown team")
    )
)]
pub async fn start_match(
    State(state): State<SharedState>,
    Json(payload): Json<StartMatchRequest>,
) -> Result<(StatusCode, Json<StartMatchResponse>), AppError> {
    let id = match_service::start_match(&state, &payload.home_team, &payload.away_team)?;
    Ok((StatusCode::CREATED, Json(StartMatchResponse { id })))
}

/// Replace both scores of an active match.
#[utoipa::path(
    put,
    path = "/matches/{id}/score",
    tag = "matches",
    params(("id" = u64, Path, description = "Identifier of the active match")),
    request_body = ScoreUpdateRequest,
    responses(
        (status = 200, description = "Score updated", body = MatchSummary),
        (status = 404, description = "No active match with this id")
    )
)]
pub async fn update_score(
    State(state): State<SharedState>,
    Path(id): Path<MatchId>,
    Json(payload): Json<ScoreUpdateRequest>,
) -> Result<Json<MatchSummary>, AppError> {
    let summary =
        match_service::update_score(&state, id, payload.home_score, payload.away_score)?;
    Ok(Json(summary))
}

/// Finish an active match and rank it.
#[utoipa::path(
    post,
    path = "/matches/{id}/finish",
    tag = "matches",
    params(("id" = u64, Path, description = "Identifier of the active match")),
    responses(
        (status = 200, description = "Match finished", body = MatchSummary),
        (status = 404, description = "No active match with this id")
    )
)]
pub async fn finish_match(
    State(state): State<SharedState>,
    Path(id): Path<MatchId>,
) -> Result<Json<MatchSummary>, AppError> {
    Ok(Json(match_service::finish_match(&state, id)?))
}

/// List finished matches by total score, newest first among ties.
#[utoipa::path(
    get,
    path = "/rankings",
    tag = "rankings",
    responses((status = 200, description = "Ranked finished matches", body = [MatchSummary]))
)]
pub async fn list_rankings(State(state): State<SharedState>) -> Json<Vec<MatchSummary>> {
    Json(match_service::ranked_matches(&state))
}
