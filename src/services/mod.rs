//! Business logic services.
//!
//! Services run the SQL for each resource on a connection handed in by the handler.
//! They never open or close connections themselves.

pub mod account_service;
pub mod campaign_service;
pub mod credit_card_service;
pub mod operation_service;
pub mod transaction_service;
pub mod update;
pub mod user_service;
pub mod wallet_service;
