//! Marketing campaigns and their assignment to users.
//!
//! Campaigns are soft deleted to `inactive`. Assignments live in the
//! `user_campaigns` join table.

use sqlx::PgConnection;

use crate::{
    error::AppError,
    models::campaign::{
        Campaign, CampaignAssignment, CreateCampaignRequest, UpdateCampaignRequest,
    },
    services::update::{PartialUpdate, numeric_text},
};

pub const INACTIVE_STATUS: &str = "inactive";

const CAMPAIGN_COLUMNS: &str = "c.id, c.name, c.goal::float8 AS goal, \
     c.cashback_percentage::float8 AS cashback_percentage, \
     c.start_date, c.end_date, c.status";

pub async fn get_campaign(
    conn: &mut PgConnection,
    campaign_id: i64,
) -> Result<Campaign, AppError> {
    sqlx::query_as::<_, Campaign>(&format!(
        "SELECT {CAMPAIGN_COLUMNS} FROM campaigns c WHERE c.id = $1"
    ))
    .bind(campaign_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(AppError::NotFound("Campaign not found"))
}

/// Every campaign, soft-deleted ones included.
pub async fn list_campaigns(conn: &mut PgConnection) -> Result<Vec<Campaign>, AppError> {
    let campaigns = sqlx::query_as::<_, Campaign>(&format!(
        "SELECT {CAMPAIGN_COLUMNS} FROM campaigns c ORDER BY c.id"
    ))
    .fetch_all(&mut *conn)
    .await?;

    Ok(campaigns)
}

/// Campaigns assigned to a user through `user_campaigns`.
pub async fn list_user_campaigns(
    conn: &mut PgConnection,
    user_id: i64,
) -> Result<Vec<Campaign>, AppError> {
    let campaigns = sqlx::query_as::<_, Campaign>(&format!(
        r#"
        SELECT {CAMPAIGN_COLUMNS}
        FROM campaigns c
        JOIN user_campaigns uc ON c.id = uc.campaign_id
        WHERE uc.user_id = $1
        ORDER BY c.id
        "#
    ))
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(campaigns)
}

pub async fn create_campaign(
    conn: &mut PgConnection,
    request: CreateCampaignRequest,
) -> Result<i64, AppError> {
    let campaign_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO campaigns (name, goal, cashback_percentage, start_date, end_date)
        VALUES ($1, $2::numeric, $3::numeric, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&request.name)
    .bind(numeric_text(request.goal))
    .bind(numeric_text(request.cashback_percentage))
    .bind(request.start_date)
    .bind(request.end_date)
    .fetch_one(&mut *conn)
    .await?;

    tracing::info!(campaign_id, "campaign created");
    Ok(campaign_id)
}

pub async fn update_campaign(
    conn: &mut PgConnection,
    campaign_id: i64,
    request: UpdateCampaignRequest,
) -> Result<(), AppError> {
    PartialUpdate::new("campaigns")
        .text("name", request.name)
        .float("goal", request.goal)
        .float("cashback_percentage", request.cashback_percentage)
        .date("start_date", request.start_date)
        .date("end_date", request.end_date)
        .execute(conn, &[("id", campaign_id)])
        .await
}

pub async fn delete_campaign(conn: &mut PgConnection, campaign_id: i64) -> Result<(), AppError> {
    sqlx::query("UPDATE campaigns SET status = $1 WHERE id = $2")
        .bind(INACTIVE_STATUS)
        .bind(campaign_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// Assign a campaign to a user. Assigning twice keeps a single row.
///
/// Neither the user nor the campaign is checked for existence; a missing campaign
/// fails on the foreign key.
pub async fn assign_campaign(
    conn: &mut PgConnection,
    user_id: i64,
    campaign_id: i64,
) -> Result<CampaignAssignment, AppError> {
    sqlx::query(
        r#"
        INSERT INTO user_campaigns (user_id, campaign_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, campaign_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(campaign_id)
    .execute(&mut *conn)
    .await?;

    Ok(CampaignAssignment {
        user_id,
        campaign_id,
    })
}
