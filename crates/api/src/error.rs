use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tavern_core::error::CoreError;
use tavern_db::RepoError;

/// Message returned when a character name is already taken.
pub const DUPLICATE_NAME_MESSAGE: &str = "Character with the same name already exists";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for input validation and [`RepoError`] for
/// repository failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A validation error from `tavern_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from a repository operation.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }

            AppError::Repo(repo) => classify_repo_error(repo),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a repository error into an HTTP status, error code, and message.
///
/// - `DuplicateName` maps to 409 with a fixed message.
/// - `NotFound` maps to 404.
/// - `Storage` maps to 500 with a sanitized message.
fn classify_repo_error(err: &RepoError) -> (StatusCode, &'static str, String) {
    match err {
        RepoError::DuplicateName(_) => (
            StatusCode::CONFLICT,
            "CONFLICT",
            DUPLICATE_NAME_MESSAGE.to_string(),
        ),
        RepoError::NotFound { entity, key } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with {key} not found"),
        ),
        RepoError::Storage(db_err) => {
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
