//! Operation (activity log) data models.

use serde::{Deserialize, Serialize};

/// A row of the `operations` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Operation {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
}

/// Entry of `GET /users/{id}/operations`, which leaves out the owner.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct OperationSummary {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOperationRequest {
    pub user_id: i64,
    pub description: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateOperationRequest {
    pub description: Option<String>,
}
