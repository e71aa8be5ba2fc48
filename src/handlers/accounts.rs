//! Account management HTTP handlers.
//!
//! - GET /users/{id}/accounts - List a user's accounts
//! - POST /users/{id}/accounts - Create account
//! - PUT /users/{id}/accounts/{account_id} - Partial update
//! - DELETE /users/{id}/accounts/{account_id} - Logical delete

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    db::Database,
    error::AppError,
    extract::{ApiJson, ApiPath},
    models::{
        MessageResponse,
        account::{Account, CreateAccountRequest, UpdateAccountRequest},
    },
    services::account_service,
};

/// List all accounts of a user.
///
/// # Response
///
/// - **Success (200 OK)**: array of accounts, possibly empty
///
/// ```json
/// [
///   {
///     "id": 4,
///     "user_id": 1,
///     "account_type": "checking",
///     "balance": 120.0,
///     "currency": "USD",
///     "status": "active"
///   }
/// ]
/// ```
pub async fn list_accounts(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<Account>>, AppError> {
    let mut conn = db.acquire().await?;
    let result = account_service::list_accounts(&mut conn, user_id).await;
    conn.release().await;

    Ok(Json(result?))
}

/// Create an account for a user.
///
/// # Response
///
/// - **Success (201 Created)**: the stored account
pub async fn create_account(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(request): ApiJson<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let mut conn = db.acquire().await?;
    let result = account_service::create_account(&mut conn, user_id, request).await;
    conn.release().await;

    Ok((StatusCode::CREATED, Json(result?)))
}

pub async fn update_account(
    State(db): State<Database>,
    ApiPath((user_id, account_id)): ApiPath<(i64, i64)>,
    ApiJson(request): ApiJson<UpdateAccountRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = account_service::update_account(&mut conn, user_id, account_id, request).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Account updated successfully")))
}

pub async fn delete_account(
    State(db): State<Database>,
    ApiPath((user_id, account_id)): ApiPath<(i64, i64)>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = account_service::delete_account(&mut conn, user_id, account_id).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Account logically deleted")))
}
