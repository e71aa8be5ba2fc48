//! Campaign HTTP handlers.
//!
//! - GET /campaigns - List every campaign
//! - POST /campaigns - Create campaign
//! - GET /campaigns/{id} - Get campaign by ID
//! - PUT /campaigns/{id} - Partial update
//! - DELETE /campaigns/{id} - Logical delete (status `inactive`)
//! - GET /users/{id}/campaigns - Campaigns assigned to a user
//! - POST /users/{id}/campaigns/{campaign_id} - Assign a campaign to a user

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    db::Database,
    error::AppError,
    extract::{ApiJson, ApiPath},
    models::{
        CreatedResponse, MessageResponse,
        campaign::{Campaign, CampaignAssignment, CreateCampaignRequest, UpdateCampaignRequest},
    },
    services::campaign_service,
};

pub async fn list_campaigns(
    State(db): State<Database>,
) -> Result<Json<Vec<Campaign>>, AppError> {
    let mut conn = db.acquire().await?;
    let result = campaign_service::list_campaigns(&mut conn).await;
    conn.release().await;

    Ok(Json(result?))
}

/// Get a campaign by ID.
///
/// # Response
///
/// - **Success (200 OK)**: the campaign, dates as `YYYY-MM-DD`
/// - **Error (404)**: Campaign not found
pub async fn get_campaign(
    State(db): State<Database>,
    ApiPath(campaign_id): ApiPath<i64>,
) -> Result<Json<Campaign>, AppError> {
    let mut conn = db.acquire().await?;
    let result = campaign_service::get_campaign(&mut conn, campaign_id).await;
    conn.release().await;

    Ok(Json(result?))
}

pub async fn list_user_campaigns(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<Campaign>>, AppError> {
    let mut conn = db.acquire().await?;
    let result = campaign_service::list_user_campaigns(&mut conn, user_id).await;
    conn.release().await;

    Ok(Json(result?))
}

pub async fn create_campaign(
    State(db): State<Database>,
    ApiJson(request): ApiJson<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let mut conn = db.acquire().await?;
    let result = campaign_service::create_campaign(&mut conn, request).await;
    conn.release().await;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: result? })))
}

pub async fn update_campaign(
    State(db): State<Database>,
    ApiPath(campaign_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateCampaignRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = campaign_service::update_campaign(&mut conn, campaign_id, request).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Campaign updated successfully")))
}

pub async fn delete_campaign(
    State(db): State<Database>,
    ApiPath(campaign_id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = db.acquire().await?;
    let result = campaign_service::delete_campaign(&mut conn, campaign_id).await;
    conn.release().await;

    result?;
    Ok(Json(MessageResponse::new("Campaign logically deleted")))
}

pub async fn assign_campaign(
    State(db): State<Database>,
    ApiPath((user_id, campaign_id)): ApiPath<(i64, i64)>,
) -> Result<(StatusCode, Json<CampaignAssignment>), AppError> {
    let mut conn = db.acquire().await?;
    let result = campaign_service::assign_campaign(&mut conn, user_id, campaign_id).await;
    conn.release().await;

    Ok((StatusCode::CREATED, Json(result?)))
}
