//! HTTP error mapping.
//!
//! Handlers return [`AppResult`]; every failure funnels through
//! [`AppError::into_response`] and comes out as `{ "error", "code" }`
//! JSON with the matching status. Database failures are classified here
//! so raw driver messages never reach a client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use carteira_core::error::CoreError;
use carteira_core::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error from `carteira_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Anything sqlx reported.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request input outside the validation gate, e.g. an
    /// unknown filter tag.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A failure the client can do nothing about.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            // Validation messages are written for end users; they pass
            // through verbatim.
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                sanitized_internal()
            }
            AppError::Database(err) => db_error_parts(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                sanitized_internal()
            }
        };

        let body = json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}

fn sanitized_internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map a sqlx error to status, code, and client-safe message.
///
/// `RowNotFound` is a plain 404 and a Postgres unique violation (23505)
/// a 409; everything else logs the real error and reports a sanitized
/// 500.
fn db_error_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            sanitized_internal()
        }
    }
}
