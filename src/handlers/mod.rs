//! HTTP request handlers (route handlers).
//!
//! Each handler:
//! 1. Extracts path parameters and the JSON body
//! 2. Opens a connection, runs the service call, releases the connection
//! 3. Returns the JSON response or the error

pub mod accounts;
pub mod campaigns;
pub mod credit_cards;
pub mod health;
pub mod operations;
pub mod transactions;
pub mod users;
pub mod wallet;
