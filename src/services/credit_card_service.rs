//! Payment cards, stored in `card_info` and attached to an account.
//!
//! Cards are listed through their account's owner, but updates and deletes address
//! the card by id alone.

use sqlx::PgConnection;

use crate::{
    error::AppError,
    models::credit_card::{CreateCreditCardRequest, CreditCard, UpdateCreditCardRequest},
    services::update::PartialUpdate,
};

pub const DELETED_STATUS: &str = "deleted";

/// List cards on any account of the user.
pub async fn list_cards(
    conn: &mut PgConnection,
    user_id: i64,
) -> Result<Vec<CreditCard>, AppError> {
    let cards = sqlx::query_as::<_, CreditCard>(
        r#"
        SELECT id, account_id, card_number, expiration_date, status
        FROM card_info
        WHERE account_id IN (SELECT id FROM accounts WHERE user_id = $1)
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(cards)
}

/// Create a card on one of the user's accounts.
///
/// # Process
///
/// 1. Pick one account of the user (any of them when there are several)
/// 2. Insert the card on that account, `status` defaulting to `active`
///
/// # Errors
///
/// - `NotFound`: the user has no account
pub async fn create_card(
    conn: &mut PgConnection,
    user_id: i64,
    request: CreateCreditCardRequest,
) -> Result<i64, AppError> {
    let account_id: i64 = sqlx::query_scalar("SELECT id FROM accounts WHERE user_id = $1 LIMIT 1")
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(AppError::NotFound("User account not found"))?;

    let card_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO card_info (account_id, card_number, expiration_date, status)
        VALUES ($1, $2, $3, COALESCE($4, 'active'))
        RETURNING id
        "#,
    )
    .bind(account_id)
    .bind(&request.card_number)
    .bind(request.expiration_date)
    .bind(request.status.as_deref())
    .fetch_one(&mut *conn)
    .await?;

    tracing::info!(user_id, account_id, card_id, "credit card created");
    Ok(card_id)
}

pub async fn update_card(
    conn: &mut PgConnection,
    card_id: i64,
    request: UpdateCreditCardRequest,
) -> Result<(), AppError> {
    PartialUpdate::new("card_info")
        .date("expiration_date", request.expiration_date)
        .text("status", request.status)
        .execute(conn, &[("id", card_id)])
        .await
}

pub async fn delete_card(conn: &mut PgConnection, card_id: i64) -> Result<(), AppError> {
    sqlx::query("UPDATE card_info SET status = $1 WHERE id = $2")
        .bind(DELETED_STATUS)
        .bind(card_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
