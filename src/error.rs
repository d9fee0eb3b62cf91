use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::state::MatchError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<MatchError> for ServiceError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::InvalidTeam(_) => ServiceError::InvalidInput(err.to_string()),
            MatchError::NotFound(_) => ServiceError::NotFound(err.to_string()),
        }
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Collapse every client-side failure into a bad request, the way the HTML board
    /// reports them.
    pub fn into_form_error(self) -> Self {
        match self {
            AppError::NotFound(message) => AppError::BadRequest(message),
            other => other,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_errors_map_to_client_errors() {
        let invalid: AppError = ServiceError::from(MatchError::InvalidTeam("Norway".into())).into();
        assert!(matches!(&invalid, AppError::BadRequest(message) if message.contains("Norway")));
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let missing: AppError = ServiceError::from(MatchError::NotFound(42)).into();
        assert!(matches!(&missing, AppError::NotFound(message) if message.contains("42")));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn form_errors_are_always_bad_requests() {
        let missing = AppError::NotFound("match `3` not found".into()).into_form_error();
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
