//! Accounts owned by a user. Every statement is scoped by both account id and owner.

use sqlx::PgConnection;

use crate::{
    error::AppError,
    models::account::{Account, CreateAccountRequest, UpdateAccountRequest},
    services::update::{PartialUpdate, numeric_text},
};

pub const DELETED_STATUS: &str = "deleted";

const ACCOUNT_COLUMNS: &str =
    "id, user_id, account_type, balance::float8 AS balance, currency, status";

/// List all accounts of a user. An unknown user yields an empty list.
pub async fn list_accounts(
    conn: &mut PgConnection,
    user_id: i64,
) -> Result<Vec<Account>, AppError> {
    let accounts = sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE user_id = $1 ORDER BY id"
    ))
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(accounts)
}

/// Create an account under a user.
///
/// The owner's existence is not checked; a foreign-key violation surfaces as a
/// database error.
pub async fn create_account(
    conn: &mut PgConnection,
    user_id: i64,
    request: CreateAccountRequest,
) -> Result<Account, AppError> {
    let account = sqlx::query_as::<_, Account>(&format!(
        r#"
        INSERT INTO accounts (user_id, account_type, balance, currency)
        VALUES ($1, $2, $3::numeric, $4)
        RETURNING {ACCOUNT_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(&request.account_type)
    .bind(numeric_text(request.balance))
    .bind(&request.currency)
    .fetch_one(&mut *conn)
    .await?;

    Ok(account)
}

pub async fn update_account(
    conn: &mut PgConnection,
    user_id: i64,
    account_id: i64,
    request: UpdateAccountRequest,
) -> Result<(), AppError> {
    PartialUpdate::new("accounts")
        .text("account_type", request.account_type)
        .float("balance", request.balance)
        .text("currency", request.currency)
        .execute(conn, &[("id", account_id), ("user_id", user_id)])
        .await
}

/// Soft delete: cards attached to the account keep their own status.
pub async fn delete_account(
    conn: &mut PgConnection,
    user_id: i64,
    account_id: i64,
) -> Result<(), AppError> {
    sqlx::query("UPDATE accounts SET status = $1 WHERE id = $2 AND user_id = $3")
        .bind(DELETED_STATUS)
        .bind(account_id)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
