//! Users service against a real database.

mod common;

use axum::http::{Method, StatusCode};
use common::{send, test_app, test_connection};
use core_services::config::Service;
use serde_json::{Value, json};

async fn create_user(app: &axum::Router, name: &str, email: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn user_lifecycle() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };

    let (status, created) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "A", "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created, json!({ "id": id, "name": "A", "email": "a@x.com" }));

    let uri = format!("/users/{id}");
    let (status, user) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user, json!({ "id": id, "name": "A", "email": "a@x.com" }));

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "name": "B" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User updated successfully" }));

    let (_, user) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(user["name"], "B");
    assert_eq!(user["email"], "a@x.com");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User logically deleted" }));

    // Delete only flags the status record
    let (status, user) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "B");

    let mut conn = test_connection().await.unwrap();
    let status: String = sqlx::query_scalar("SELECT status FROM user_status WHERE user_id = $1")
        .bind(id)
        .fetch_one(&mut conn)
        .await
        .unwrap();
    assert_eq!(status, "deleted");
}

#[tokio::test]
async fn missing_user_is_404() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };

    let (status, body) = send(&app, Method::GET, "/users/9223372036854775000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "User not found" }));
}

#[tokio::test]
async fn empty_strings_do_not_overwrite() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };
    let id = create_user(&app, "Keep", "keep@x.com").await;
    let uri = format!("/users/{id}");

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "name": "", "email": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(user, json!({ "id": id, "name": "Keep", "email": "keep@x.com" }));
}

#[tokio::test]
async fn concurrent_updates_of_different_columns_both_persist() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };
    let id = create_user(&app, "Before", "before@x.com").await;
    let uri = format!("/users/{id}");

    let (name, email) = tokio::join!(
        send(&app, Method::PUT, &uri, Some(json!({ "name": "After" }))),
        send(&app, Method::PUT, &uri, Some(json!({ "email": "after@x.com" }))),
    );
    assert_eq!(name.0, StatusCode::OK);
    assert_eq!(email.0, StatusCode::OK);

    let (_, user) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(user["name"], "After");
    assert_eq!(user["email"], "after@x.com");
}

#[tokio::test]
async fn accounts_crud() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };
    let user_id = create_user(&app, "Owner", "owner@x.com").await;
    let list_uri = format!("/users/{user_id}/accounts");

    let (status, body) = send(&app, Method::GET, &list_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, account) = send(
        &app,
        Method::POST,
        &list_uri,
        Some(json!({ "account_type": "savings", "balance": 150.5, "currency": "USD" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let account_id = account["id"].as_i64().unwrap();
    assert_eq!(account["user_id"], user_id);
    assert_eq!(account["balance"], 150.5);
    assert_eq!(account["status"], "active");

    // Zero balance is a real value, not an absent one
    let account_uri = format!("/users/{user_id}/accounts/{account_id}");
    let (status, body) = send(&app, Method::PUT, &account_uri, Some(json!({ "balance": 0.0 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Account updated successfully");

    let (_, accounts) = send(&app, Method::GET, &list_uri, None).await;
    assert_eq!(
        accounts,
        json!([{
            "id": account_id,
            "user_id": user_id,
            "account_type": "savings",
            "balance": 0.0,
            "currency": "USD",
            "status": "active"
        }])
    );

    let (status, body) = send(&app, Method::DELETE, &account_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Account logically deleted");

    let (_, accounts) = send(&app, Method::GET, &list_uri, None).await;
    assert_eq!(accounts[0]["status"], "deleted");
}

#[tokio::test]
async fn account_update_is_scoped_to_its_owner() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };
    let owner = create_user(&app, "Owner", "o@x.com").await;
    let other = create_user(&app, "Other", "p@x.com").await;
    let (_, account) = send(
        &app,
        Method::POST,
        &format!("/users/{owner}/accounts"),
        Some(json!({ "account_type": "checking", "balance": 10.0, "currency": "EUR" })),
    )
    .await;
    let account_id = account["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/users/{other}/accounts/{account_id}"),
        Some(json!({ "currency": "GBP" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, accounts) = send(&app, Method::GET, &format!("/users/{owner}/accounts"), None).await;
    assert_eq!(accounts[0]["currency"], "EUR");
}

#[tokio::test]
async fn account_balances_read_back_exactly() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };
    let user_id = create_user(&app, "Saver", "saver@x.com").await;
    let list_uri = format!("/users/{user_id}/accounts");

    for balance in [12.345, 0.1 + 0.2, 1000.0] {
        let (status, account) = send(
            &app,
            Method::POST,
            &list_uri,
            Some(json!({ "account_type": "savings", "balance": balance, "currency": "USD" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(account["balance"].as_f64(), Some(balance));
    }

    let (_, accounts) = send(&app, Method::GET, &list_uri, None).await;
    let balances: Vec<f64> = accounts
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["balance"].as_f64().unwrap())
        .collect();
    assert_eq!(balances, vec![12.345, 0.1 + 0.2, 1000.0]);

    let account_id = accounts[0]["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("{list_uri}/{account_id}"),
        Some(json!({ "balance": 99999.999 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, accounts) = send(&app, Method::GET, &list_uri, None).await;
    assert_eq!(accounts[0]["balance"].as_f64(), Some(99999.999));
}

#[tokio::test]
async fn credit_card_needs_an_account() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };
    let user_id = create_user(&app, "NoAccount", "na@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/users/{user_id}/credit-cards"),
        Some(json!({ "card_number": "4111111111111111", "expiration_date": "2030-01-31" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "User account not found" }));
}

#[tokio::test]
async fn credit_cards_crud() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };
    let user_id = create_user(&app, "Card", "card@x.com").await;
    let (_, account) = send(
        &app,
        Method::POST,
        &format!("/users/{user_id}/accounts"),
        Some(json!({ "account_type": "checking", "balance": 1.0, "currency": "USD" })),
    )
    .await;
    let cards_uri = format!("/users/{user_id}/credit-cards");

    let (status, created) = send(
        &app,
        Method::POST,
        &cards_uri,
        Some(json!({ "card_number": "4111111111111111", "expiration_date": "2030-01-31" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let card_id = created["id"].as_i64().unwrap();
    assert_eq!(created, json!({ "id": card_id }));

    let (_, cards) = send(&app, Method::GET, &cards_uri, None).await;
    assert_eq!(
        cards,
        json!([{
            "id": card_id,
            "account_id": account["id"],
            "card_number": "4111111111111111",
            "expiration_date": "2030-01-31",
            "status": "active"
        }])
    );

    let card_uri = format!("{cards_uri}/{card_id}");
    let (status, body) = send(
        &app,
        Method::PUT,
        &card_uri,
        Some(json!({ "expiration_date": "2031-12-31" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Credit card updated successfully");

    let (status, body) = send(&app, Method::DELETE, &card_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Credit card logically deleted");

    let (_, cards) = send(&app, Method::GET, &cards_uri, None).await;
    let card: &Value = &cards[0];
    assert_eq!(card["expiration_date"], "2031-12-31");
    assert_eq!(card["status"], "deleted");
}

#[tokio::test]
async fn deleting_a_user_does_not_cascade() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };
    let user_id = create_user(&app, "Parent", "parent@x.com").await;
    send(
        &app,
        Method::POST,
        &format!("/users/{user_id}/accounts"),
        Some(json!({ "account_type": "checking", "balance": 5.0, "currency": "USD" })),
    )
    .await;

    send(&app, Method::DELETE, &format!("/users/{user_id}"), None).await;

    let (_, accounts) = send(&app, Method::GET, &format!("/users/{user_id}/accounts"), None).await;
    assert_eq!(accounts[0]["status"], "active");
}

#[tokio::test]
async fn health_reports_connected() {
    let Some(app) = test_app(Service::Users).await else {
        return;
    };

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["service"], "users");
}
