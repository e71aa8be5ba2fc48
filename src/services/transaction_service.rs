//! Transactions split across provider tables.
//!
//! Each payment rail has its own table with the same columns. Reads by owner union
//! every provider table; creates, single reads, updates and deletes all address the
//! write table only, so rows living in other provider tables are visible through the
//! owner listing but cannot be changed through this service.

use std::sync::LazyLock;

use sqlx::PgConnection;

use crate::{
    error::AppError,
    models::transaction::{CreateTransactionRequest, Transaction, UpdateTransactionRequest},
    services::update::{PartialUpdate, numeric_text},
};

pub const DELETED_STATUS: &str = "deleted";

const TRANSACTION_COLUMNS: &str =
    "id, user_id, amount::float8 AS amount, merchant, account_type, status";

/// Payment rail a transaction table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Mastercard,
    Paypal,
    Internal,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Mastercard, Provider::Paypal, Provider::Internal];

    /// Table every write goes to, whatever rail the payment used.
    pub const WRITE_TARGET: Provider = Provider::Mastercard;

    pub fn table(self) -> &'static str {
        match self {
            Provider::Mastercard => "transactions_mastercard",
            Provider::Paypal => "transactions_paypal",
            Provider::Internal => "transactions_internal",
        }
    }
}

/// `UNION` of every provider table for one owner, bound once as `$1`.
///
/// Set semantics collapse rows that are identical across tables.
fn owner_union_query() -> String {
    let selects = Provider::ALL
        .iter()
        .map(|p| format!("SELECT {TRANSACTION_COLUMNS} FROM {} WHERE user_id = $1", p.table()))
        .collect::<Vec<_>>()
        .join(" UNION ");
    format!("{selects} ORDER BY id")
}

static OWNER_UNION_QUERY: LazyLock<String> = LazyLock::new(owner_union_query);

/// Get transaction by ID from the write table.
///
/// # Errors
///
/// - `NotFound`: no row with this id
pub async fn get_transaction(
    conn: &mut PgConnection,
    transaction_id: i64,
) -> Result<Transaction, AppError> {
    sqlx::query_as::<_, Transaction>(&format!(
        "SELECT {TRANSACTION_COLUMNS} FROM {} WHERE id = $1",
        Provider::WRITE_TARGET.table()
    ))
    .bind(transaction_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(AppError::NotFound("Transaction not found"))
}

/// All transactions of a user across every provider table.
pub async fn list_user_transactions(
    conn: &mut PgConnection,
    user_id: i64,
) -> Result<Vec<Transaction>, AppError> {
    let transactions = sqlx::query_as::<_, Transaction>(OWNER_UNION_QUERY.as_str())
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(transactions)
}

/// Record a transaction in the write table. `status` defaults to `active`.
pub async fn create_transaction(
    conn: &mut PgConnection,
    request: CreateTransactionRequest,
) -> Result<i64, AppError> {
    let transaction_id: i64 = sqlx::query_scalar(&format!(
        r#"
        INSERT INTO {} (user_id, amount, merchant, account_type, status)
        VALUES ($1, $2::numeric, $3, $4, COALESCE($5, 'active'))
        RETURNING id
        "#,
        Provider::WRITE_TARGET.table()
    ))
    .bind(request.user_id)
    .bind(numeric_text(request.amount))
    .bind(&request.merchant)
    .bind(&request.account_type)
    .bind(request.status.as_deref())
    .fetch_one(&mut *conn)
    .await?;

    tracing::info!(transaction_id, user_id = request.user_id, "transaction recorded");
    Ok(transaction_id)
}

pub async fn update_transaction(
    conn: &mut PgConnection,
    transaction_id: i64,
    request: UpdateTransactionRequest,
) -> Result<(), AppError> {
    PartialUpdate::new(Provider::WRITE_TARGET.table())
        .float("amount", request.amount)
        .text("merchant", request.merchant)
        .text("account_type", request.account_type)
        .text("status", request.status)
        .execute(conn, &[("id", transaction_id)])
        .await
}

/// Logical delete in the write table only.
pub async fn delete_transaction(
    conn: &mut PgConnection,
    transaction_id: i64,
) -> Result<(), AppError> {
    sqlx::query(&format!(
        "UPDATE {} SET status = $1 WHERE id = $2",
        Provider::WRITE_TARGET.table()
    ))
    .bind(DELETED_STATUS)
    .bind(transaction_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}
