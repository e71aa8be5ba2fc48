//! User data models and API request types.

use serde::{Deserialize, Serialize};

/// A row of the `users` table.
///
/// Soft-delete state lives in `user_status` and is not part of this record.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Request body for `POST /users`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Request body for `PUT /users/{id}`. Empty strings count as absent.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}
