//! Shared helpers for router integration tests.
//!
//! Database-backed tests need `TEST_DATABASE_URL`; without it they return early.
//! All three schemas use distinct table names, so one database serves every test.

#![allow(dead_code)]

use std::str::FromStr;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use core_services::{config::Service, db::Database, routes, state::AppState};
use serde_json::Value;
use sqlx::{Connection, PgConnection, postgres::PgConnectOptions};
use tokio::sync::OnceCell;
use tower::ServiceExt;

const SCHEMAS: [&str; 3] = [
    include_str!("../../schema/users.sql"),
    include_str!("../../schema/transactions.sql"),
    include_str!("../../schema/campaigns.sql"),
];

static SCHEMA_APPLIED: OnceCell<()> = OnceCell::const_new();

/// Router whose database can never be reached.
pub fn unreachable_app(service: Service, wallet_enabled: bool) -> Router {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .database("nowhere")
        .username("nobody")
        .password("nothing");
    routes::build_router(AppState::new(service, Database::new(options)), wallet_enabled)
}

/// Connect options from `TEST_DATABASE_URL`, with the schema applied once.
pub async fn test_options() -> Option<PgConnectOptions> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL missing; skipping database tests");
            return None;
        }
    };
    let options = PgConnectOptions::from_str(&url).expect("valid TEST_DATABASE_URL");

    SCHEMA_APPLIED
        .get_or_init(|| async {
            let mut conn = PgConnection::connect_with(&options)
                .await
                .expect("connect to test database");
            for schema in SCHEMAS {
                sqlx::raw_sql(schema)
                    .execute(&mut conn)
                    .await
                    .expect("apply schema");
            }
            conn.close().await.expect("close schema connection");
        })
        .await;

    Some(options)
}

/// Router for `service` on the test database, or `None` when there is none.
pub async fn test_app(service: Service) -> Option<Router> {
    let options = test_options().await?;
    Some(routes::build_router(
        AppState::new(service, Database::new(options)),
        false,
    ))
}

/// Direct connection for assertions the API does not expose.
pub async fn test_connection() -> Option<PgConnection> {
    let options = test_options().await?;
    Some(
        PgConnection::connect_with(&options)
            .await
            .expect("connect to test database"),
    )
}

/// Owner id unlikely to collide with other test runs sharing the database.
pub fn unique_owner_id() -> i64 {
    1_000_000 + i64::from(rand::random::<u32>())
}

/// Send one request and decode the JSON body (`Value::Null` when empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    send_request(app, request).await
}

/// Send a prebuilt request, for bodies that are not valid JSON.
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}
