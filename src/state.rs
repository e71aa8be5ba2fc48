//! Shared state handed to every handler.

use axum::extract::FromRef;

use crate::{config::Service, db::Database, services::wallet_service::WalletStore};

/// Handlers extract the part they need, e.g. `State<Database>`.
#[derive(Debug, Clone, FromRef)]
pub struct AppState {
    pub service: Service,
    pub db: Database,
    pub wallets: WalletStore,
}

impl AppState {
    pub fn new(service: Service, db: Database) -> Self {
        Self {
            service,
            db,
            wallets: WalletStore::new(),
        }
    }
}
