//! Wallet items kept in process memory.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a user's wallet, e.g. a saved card or a savings pot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub details: Map<String, Value>,
}

/// Body of `GET /users/{id}/wallet`.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalletResponse {
    pub wallet: Vec<WalletItem>,
}

/// Body of wallet writes: a message plus the wallet after the change.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalletUpdateResponse {
    pub message: String,
    pub wallet: Vec<WalletItem>,
}
