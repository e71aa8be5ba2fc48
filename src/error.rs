//! Error types and HTTP error response handling.
//!
//! Every error leaves the service as JSON of the form `{"detail": "..."}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A primary-key lookup, or a lookup the operation depends on, found nothing.
    ///
    /// Returns HTTP 404 with the message as detail.
    #[error("{0}")]
    NotFound(&'static str),

    /// The database could not be reached or refused the credentials.
    ///
    /// Returns HTTP 500 without the underlying cause.
    #[error("Database connection error")]
    Connection(#[source] sqlx::Error),

    /// Any other database failure, constraint violations included.
    ///
    /// Returns HTTP 500 (hides details from client).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body or path parameters could not be parsed.
    ///
    /// Returns HTTP 422.
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `NotFound` → 404 Not Found
/// - `InvalidRequest` → 422 Unprocessable Entity
/// - `Connection` → 500, detail "Database connection error"
/// - `Database` → 500, detail "Internal server error"
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            AppError::InvalidRequest(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Connection(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database connection error".to_string(),
            ),
            AppError::Database(ref e) => {
                tracing::error!(error = %e, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
