//! User records and their soft-delete status.
//!
//! A user's lifecycle state is kept in `user_status`, one row per user, so reads from
//! `users` never see it.

use sqlx::{Connection, PgConnection};

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, UpdateUserRequest, User},
    services::update::PartialUpdate,
};

/// Status written by a logical delete.
pub const DELETED_STATUS: &str = "deleted";

/// Get user by ID.
///
/// # Errors
///
/// - `NotFound`: no row with this id
pub async fn get_user(conn: &mut PgConnection, user_id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(AppError::NotFound("User not found"))
}

/// Create a user together with its `active` status row.
///
/// Both inserts commit or neither does.
pub async fn create_user(
    conn: &mut PgConnection,
    request: CreateUserRequest,
) -> Result<User, AppError> {
    let mut tx = conn.begin().await?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email",
    )
    .bind(&request.name)
    .bind(&request.email)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO user_status (user_id, status) VALUES ($1, 'active')")
        .bind(user.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(user)
}

pub async fn update_user(
    conn: &mut PgConnection,
    user_id: i64,
    request: UpdateUserRequest,
) -> Result<(), AppError> {
    PartialUpdate::new("users")
        .text("name", request.name)
        .text("email", request.email)
        .execute(conn, &[("id", user_id)])
        .await
}

/// Mark the user deleted in `user_status`.
///
/// The `users` row, accounts and cards are left as they are.
pub async fn delete_user(conn: &mut PgConnection, user_id: i64) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE user_status SET status = $1 WHERE user_id = $2")
        .bind(DELETED_STATUS)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    tracing::info!(user_id, rows = result.rows_affected(), "user logically deleted");
    Ok(())
}
