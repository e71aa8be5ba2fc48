//! Transaction HTTP handlers.
//!
//! - GET /transactions/{id} - Get transaction from the write table
//! - GET /users/{id}/transactions - Union of every provider table
//! - POST /transactions - Record transaction
//! - PUT /transactions/{id} - Partial update
//! - DELETE /transactions/{id} - Logical delete

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    db::Database,
    error::AppError,
    extract::{ApiJson, ApiPath},
    models::{
        CreatedResponse, MessageResponse,
        transaction::{CreateTransactionRequest, Transaction, UpdateTransactionRequest},
    },
    services::transaction_service,
};

/// Get transaction by ID.
///
/// # Response (200)
///
/// ```json
/// {
///   "id": 12,
///   "user_id": 7,
///   "amount": 42.0,
///   "merchant": "Corner Shop",
///   "account_type": "credit",
///   "status": "active"
/// }
/// ```
pub async fn get_transaction(
    State(db): State<Database>,
    ApiPath(transaction_id): ApiPath<i64>,
) -> Result<Json<Transaction>, AppError> {
    let mut conn = db.acquire().await?;
    let result = transaction_service::get_transaction(&mut conn, transaction_id).await;
    conn.release().await;

    Ok(Json(result?))
}

pub async fn list_user_transactions(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let mut conn = db.acquire().await?;
    let result = transaction_service::list_user_transactions(&mut conn, user_id).await;
    conn.release().await;

    Ok(Json(result?))
}

pub async fn create_transaction(
    State(db): State<Database>,
    ApiJson(request): ApiJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let mut conn = db.acquire().await?;
    let result = transaction_service::create_transaction(&mut conn, request).await;
    conn.release().await;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: result? })))
}

pub async fn update_transaction(
    State(db): State<Database>,
    ApiPath(transaction_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateTransactionRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = transaction_service::update_transaction(&mut conn, transaction_id, request).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Transaction updated successfully")))
}

pub async fn delete_transaction(
    State(db): State<Database>,
    ApiPath(transaction_id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = transaction_service::delete_transaction(&mut conn, transaction_id).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Transaction logically deleted")))
}
