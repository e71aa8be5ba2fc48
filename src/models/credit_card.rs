//! Credit card data models (`card_info` table).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the `card_info` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: i64,
    pub account_id: i64,
    pub card_number: String,

    /// Serialized as `YYYY-MM-DD`
    pub expiration_date: NaiveDate,

    pub status: String,
}

/// Request body for `POST /users/{id}/credit-cards`.
///
/// `status` defaults to `active` when absent or null.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCreditCardRequest {
    pub card_number: String,
    pub expiration_date: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for a partial credit card update.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateCreditCardRequest {
    pub expiration_date: Option<NaiveDate>,
    pub status: Option<String>,
}
