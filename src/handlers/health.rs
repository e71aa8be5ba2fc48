//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{config::Service, db::Database, error::AppError};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// Which of the three services answered
    pub service: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// Opens a connection and runs `SELECT 1`.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "database": "connected",
///   "service": "users",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// If the database is unreachable, returns the standard 500 error body.
pub async fn health_check(
    State(db): State<Database>,
    State(service): State<Service>,
) -> Result<Json<HealthResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = sqlx::query("SELECT 1").execute(&mut *conn).await;
    conn.release().await;
    result?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        service: service.name().to_string(),
        timestamp: Utc::now(),
    }))
}
