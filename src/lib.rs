//! Core CRUD services: users, transactions and campaigns.
//!
//! Three independently deployable REST services built from one crate. Each one maps
//! HTTP verbs and paths straight onto SQL against its own PostgreSQL database.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, one connection per request
//! - **Format**: JSON requests/responses, errors as `{"detail": "..."}`
//!
//! The binaries in `src/bin` only pick a [`config::Service`] and call
//! [`server::run`].

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
