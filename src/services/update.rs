//! Column-by-column partial updates.
//!
//! A request body with optional fields becomes a list of single-column `UPDATE`
//! statements, all executed inside one database transaction.
//!
//! # Field Rules
//!
//! - Text fields are applied when present and non-empty
//! - Numeric and date fields are applied when present (zero is a valid value)
//! - Absent fields are left untouched

use chrono::NaiveDate;
use sqlx::{Connection, PgConnection};

use crate::error::AppError;

/// A value bound to a single-column update.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    Float(f64),
    Date(NaiveDate),
}

/// Planned update against one table.
///
/// Table, column and filter names are compile-time constants; only values are bound.
#[derive(Debug)]
pub struct PartialUpdate {
    table: &'static str,
    columns: Vec<(&'static str, ColumnValue)>,
}

impl PartialUpdate {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
        }
    }

    pub fn text(mut self, column: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.columns.push((column, ColumnValue::Text(value)));
        }
        self
    }

    pub fn float(mut self, column: &'static str, value: Option<f64>) -> Self {
        if let Some(value) = value {
            self.columns.push((column, ColumnValue::Float(value)));
        }
        self
    }

    pub fn date(mut self, column: &'static str, value: Option<NaiveDate>) -> Self {
        if let Some(value) = value {
            self.columns.push((column, ColumnValue::Date(value)));
        }
        self
    }

    /// Columns that will be written, in statement order.
    pub fn columns(&self) -> Vec<&'static str> {
        self.columns.iter().map(|(column, _)| *column).collect()
    }

    /// SQL for one column, with the value as `$1` and filters from `$2` onwards.
    ///
    /// Float values travel as decimal text and are cast to `numeric` in SQL.
    fn statement(
        &self,
        column: &str,
        value: &ColumnValue,
        filters: &[(&'static str, i64)],
    ) -> String {
        let placeholder = match value {
            ColumnValue::Float(_) => "$1::numeric",
            ColumnValue::Text(_) | ColumnValue::Date(_) => "$1",
        };
        let conditions = filters
            .iter()
            .enumerate()
            .map(|(i, (name, _))| format!("{name} = ${}", i + 2))
            .collect::<Vec<_>>()
            .join(" AND ");
        format!(
            "UPDATE {} SET {column} = {placeholder} WHERE {conditions}",
            self.table
        )
    }

    /// Run every planned column update in one transaction.
    ///
    /// Rows matched by `filters` are updated; no row matching is not an error.
    /// A failing statement rolls back the columns already written by this call.
    pub async fn execute(
        self,
        conn: &mut PgConnection,
        filters: &[(&'static str, i64)],
    ) -> Result<(), AppError> {
        if self.columns.is_empty() {
            return Ok(());
        }

        let mut tx = conn.begin().await?;

        for (column, value) in &self.columns {
            let sql = self.statement(column, value, filters);
            let query = sqlx::query(&sql);
            let mut query = match value {
                ColumnValue::Text(text) => query.bind(text.as_str()),
                ColumnValue::Float(number) => query.bind(numeric_text(*number)),
                ColumnValue::Date(date) => query.bind(*date),
            };
            for (_, id) in filters {
                query = query.bind(*id);
            }
            query.execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::debug!(table = self.table, columns = ?self.columns(), "partial update applied");
        Ok(())
    }
}

/// Shortest decimal text that parses back to exactly `value`.
///
/// Binding a float directly lets Postgres convert it to `numeric` with 15
/// significant digits, which loses values such as `0.1 + 0.2`.
pub fn numeric_text(value: f64) -> String {
    value.to_string()
}
