use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the match board JSON API.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::matches::list_active,
        crate::routes::matches::start_match,
        crate::routes::matches::update_score,
        crate::routes::matches::finish_match,
        crate::routes::matches::list_rankings,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::matches::StartMatchRequest,
            crate::dto::matches::StartMatchResponse,
            crate::dto::matches::ScoreUpdateRequest,
            crate::dto::matches::MatchSummary,
            crate::state::Team,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "matches", description = "Live match tracking"),
        (name = "rankings", description = "Finished matches by total score"),
    )
)]
pub struct ApiDoc;
