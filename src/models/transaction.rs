//! Transaction data models and API request types.

use serde::{Deserialize, Serialize};

/// A transaction row, from whichever provider table it was read.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub merchant: String,
    pub account_type: String,

    /// `active` unless set otherwise; `deleted` after a logical delete
    pub status: String,
}

/// Request body for `POST /transactions`.
///
/// # JSON Example
///
/// ```json
/// {
///   "user_id": 7,
///   "amount": 42.0,
///   "merchant": "Corner Shop",
///   "account_type": "credit"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub user_id: i64,
    pub amount: f64,
    pub merchant: String,
    pub account_type: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for a partial transaction update.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    pub amount: Option<f64>,
    pub merchant: Option<String>,
    pub account_type: Option<String>,
    pub status: Option<String>,
}
