//! Operations: the per-user activity log. There is no delete.

use sqlx::PgConnection;

use crate::{
    error::AppError,
    models::operation::{
        CreateOperationRequest, Operation, OperationSummary, UpdateOperationRequest,
    },
    services::update::PartialUpdate,
};

pub async fn get_operation(
    conn: &mut PgConnection,
    operation_id: i64,
) -> Result<Operation, AppError> {
    sqlx::query_as::<_, Operation>(
        "SELECT id, user_id, description FROM operations WHERE id = $1",
    )
    .bind(operation_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(AppError::NotFound("Operation not found"))
}

pub async fn list_user_operations(
    conn: &mut PgConnection,
    user_id: i64,
) -> Result<Vec<OperationSummary>, AppError> {
    let operations = sqlx::query_as::<_, OperationSummary>(
        "SELECT id, description FROM operations WHERE user_id = $1 ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(operations)
}

pub async fn create_operation(
    conn: &mut PgConnection,
    request: CreateOperationRequest,
) -> Result<i64, AppError> {
    let operation_id: i64 = sqlx::query_scalar(
        "INSERT INTO operations (user_id, description) VALUES ($1, $2) RETURNING id",
    )
    .bind(request.user_id)
    .bind(&request.description)
    .fetch_one(&mut *conn)
    .await?;

    Ok(operation_id)
}

pub async fn update_operation(
    conn: &mut PgConnection,
    operation_id: i64,
    request: UpdateOperationRequest,
) -> Result<(), AppError> {
    PartialUpdate::new("operations")
        .text("description", request.description)
        .execute(conn, &[("id", operation_id)])
        .await
}
