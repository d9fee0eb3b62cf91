use axum::{
    Form, Router,
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
};

use crate::{
    dto::form::{EndGameForm, StartGameForm, UpdateScoreForm},
    error::AppError,
    services::board_service,
    state::SharedState,
};

/// Browser-facing board: one page plus the form targets that redirect back to it.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/start_game", post(start_game))
        .route("/update_score", post(update_score))
        .route("/end_game", post(end_game))
}

/// Render the board with both match panels.
pub async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(board_service::render_page(&state))
}

/// Start a match picked in the board's selectors.
pub async fn start_game(
    State(state): State<SharedState>,
    Form(form): Form<StartGameForm>,
) -> Result<Redirect, AppError> {
    board_service::start_from_form(&state, &form)
        .map_err(|err| AppError::from(err).into_form_error())?;
    Ok(Redirect::to("/"))
}

/// Overwrite the score of an active match.
pub async fn update_score(
    State(state): State<SharedState>,
    Form(form): Form<UpdateScoreForm>,
) -> Result<Redirect, AppError> {
    board_service::update_from_form(&state, &form)
        .map_err(|err| AppError::from(err).into_form_error())?;
    Ok(Redirect::to("/"))
}

/// Finish an active match and move it to the completed panel.
pub async fn end_game(
    State(state): State<SharedState>,
    Form(form): Form<EndGameForm>,
) -> Result<Redirect, AppError> {
    board_service::finish_from_form(&state, &form)
        .map_err(|err| AppError::from(err).into_form_error())?;
    Ok(Redirect::to("/"))
}
