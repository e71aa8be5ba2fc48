//! Per-request database connections.
//!
//! There is no pool: every request opens its own `PgConnection` and closes it again
//! before the response is written, error paths included.

use std::ops::{Deref, DerefMut};

use sqlx::{Connection, PgConnection, postgres::PgConnectOptions};

use crate::error::AppError;

/// Handle used by handlers to open connections.
///
/// Cheap to clone; holds only the connect options.
#[derive(Debug, Clone)]
pub struct Database {
    options: PgConnectOptions,
}

impl Database {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Open a fresh connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Connection` when the server is unreachable or rejects the
    /// credentials. The cause is logged here and never reaches the caller.
    pub async fn acquire(&self) -> Result<DbConn, AppError> {
        match PgConnection::connect_with(&self.options).await {
            Ok(conn) => Ok(DbConn { conn }),
            Err(e) => {
                tracing::error!(error = %e, "failed to open database connection");
                Err(AppError::Connection(e))
            }
        }
    }
}

/// A connection scoped to one request.
///
/// Call [`DbConn::release`] once the work is done. Dropping it without releasing still
/// closes the socket, only without the graceful termination message.
pub struct DbConn {
    conn: PgConnection,
}

impl DbConn {
    /// Close the connection gracefully.
    pub async fn release(self) {
        if let Err(e) = self.conn.close().await {
            tracing::warn!(error = %e, "failed to close database connection");
        }
    }
}

impl Deref for DbConn {
    type Target = PgConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}
