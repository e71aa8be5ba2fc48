//! Account data models and API request types.

use serde::{Deserialize, Serialize};

/// A row of the `accounts` table.
///
/// `balance` is stored as `NUMERIC` and read back as a float.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub account_type: String,
    pub balance: f64,
    pub currency: String,

    /// `active` until logically deleted, then `deleted`
    pub status: String,
}

/// Request body for creating an account under a user.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_type": "savings",
///   "balance": 150.5,
///   "currency": "USD"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub account_type: String,
    pub balance: f64,
    pub currency: String,
}

/// Request body for a partial account update.
///
/// A `balance` of zero is applied; empty strings are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub account_type: Option<String>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
}
