//! User management HTTP handlers.
//!
//! - GET /users/{id} - Get user by ID
//! - POST /users - Create user
//! - PUT /users/{id} - Partial update
//! - DELETE /users/{id} - Logical delete (status record only)

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    db::Database,
    error::AppError,
    extract::{ApiJson, ApiPath},
    models::{
        MessageResponse,
        user::{CreateUserRequest, UpdateUserRequest, User},
    },
    services::user_service,
};

/// Get a user by ID.
///
/// # Response
///
/// - **Success (200 OK)**: `{"id": 1, "name": "A", "email": "a@x.com"}`
/// - **Error (404)**: User not found
/// - **Error (500)**: Database error
///
/// Logically deleted users are still returned.
pub async fn get_user(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<User>, AppError> {
    let mut conn = db.acquire().await?;
    let result = user_service::get_user(&mut conn, user_id).await;
    conn.release().await;

    Ok(Json(result?))
}

/// Create a user.
///
/// # Response
///
/// - **Success (201 Created)**: the new id with the submitted fields
pub async fn create_user(
    State(db): State<Database>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let mut conn = db.acquire().await?;
    let result = user_service::create_user(&mut conn, request).await;
    conn.release().await;

    Ok((StatusCode::CREATED, Json(result?)))
}

pub async fn update_user(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = user_service::update_user(&mut conn, user_id, request).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// Logically delete a user.
///
/// Only `user_status` changes. Answers 200 even when the id is unknown.
pub async fn delete_user(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = user_service::delete_user(&mut conn, user_id).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("User logically deleted")))
}
