//! Campaign data models and the user assignment body.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the `campaigns` table.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 3,
///   "name": "Summer cashback",
///   "goal": 10000.0,
///   "cashback_percentage": 2.5,
///   "start_date": "2025-06-01",
///   "end_date": "2025-08-31",
///   "status": "active"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub goal: f64,
    pub cashback_percentage: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// `active` until logically deleted, then `inactive`
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub goal: f64,
    pub cashback_percentage: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub goal: Option<f64>,
    pub cashback_percentage: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A row of the `user_campaigns` join table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignAssignment {
    pub user_id: i64,
    pub campaign_id: i64,
}
