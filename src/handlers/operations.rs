//! Operation (activity log) HTTP handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    db::Database,
    error::AppError,
    extract::{ApiJson, ApiPath},
    models::{
        CreatedResponse, MessageResponse,
        operation::{CreateOperationRequest, Operation, OperationSummary, UpdateOperationRequest},
    },
    services::operation_service,
};

pub async fn get_operation(
    State(db): State<Database>,
    ApiPath(operation_id): ApiPath<i64>,
) -> Result<Json<Operation>, AppError> {
    let mut conn = db.acquire().await?;
    let result = operation_service::get_operation(&mut conn, operation_id).await;
    conn.release().await;

    Ok(Json(result?))
}

/// List a user's operations as `{"id", "description"}` pairs.
pub async fn list_user_operations(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<OperationSummary>>, AppError> {
    let mut conn = db.acquire().await?;
    let result = operation_service::list_user_operations(&mut conn, user_id).await;
    conn.release().await;

    Ok(Json(result?))
}

pub async fn create_operation(
    State(db): State<Database>,
    ApiJson(request): ApiJson<CreateOperationRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let mut conn = db.acquire().await?;
    let result = operation_service::create_operation(&mut conn, request).await;
    conn.release().await;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: result? })))
}

pub async fn update_operation(
    State(db): State<Database>,
    ApiPath(operation_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateOperationRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = operation_service::update_operation(&mut conn, operation_id, request).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Operation updated successfully")))
}
