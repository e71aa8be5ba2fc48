//! Credit card HTTP handlers.
//!
//! - GET /users/{id}/credit-cards - Cards on any of the user's accounts
//! - POST /users/{id}/credit-cards - Create card on one of the user's accounts
//! - PUT /users/{id}/credit-cards/{card_id} - Partial update
//! - DELETE /users/{id}/credit-cards/{card_id} - Logical delete
//!
//! Update and delete address the card by its id; the user id in the path is not
//! checked against the card.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    db::Database,
    error::AppError,
    extract::{ApiJson, ApiPath},
    models::{
        CreatedResponse, MessageResponse,
        credit_card::{CreateCreditCardRequest, CreditCard, UpdateCreditCardRequest},
    },
    services::credit_card_service,
};

pub async fn list_cards(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<CreditCard>>, AppError> {
    let mut conn = db.acquire().await?;
    let result = credit_card_service::list_cards(&mut conn, user_id).await;
    conn.release().await;

    Ok(Json(result?))
}

/// Create a card.
///
/// # Request Body
///
/// ```json
/// {
///   "card_number": "4111111111111111",
///   "expiration_date": "2030-01-31",
///   "status": "active"  // optional
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"id": 9}`
/// - **Error (404)**: the user has no account
pub async fn create_card(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(request): ApiJson<CreateCreditCardRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let mut conn = db.acquire().await?;
    let result = credit_card_service::create_card(&mut conn, user_id, request).await;
    conn.release().await;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: result? })))
}

pub async fn update_card(
    State(db): State<Database>,
    ApiPath((_user_id, card_id)): ApiPath<(i64, i64)>,
    ApiJson(request): ApiJson<UpdateCreditCardRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = credit_card_service::update_card(&mut conn, card_id, request).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Credit card updated successfully")))
}

pub async fn delete_card(
    State(db): State<Database>,
    ApiPath((_user_id, card_id)): ApiPath<(i64, i64)>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = credit_card_service::delete_card(&mut conn, card_id).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Credit card logically deleted")))
}
