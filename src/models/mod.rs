//! Data models representing database entities and API bodies.
//!
//! Row types derive `sqlx::FromRow`; numeric columns are cast to `float8` in SQL
//! so they decode straight into `f64`.

use serde::{Deserialize, Serialize};

pub mod account;
pub mod campaign;
pub mod credit_card;
pub mod operation;
pub mod transaction;
pub mod user;
pub mod wallet;

/// Body returned by update and delete endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Body returned by create endpoints that only echo the generated id.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}
