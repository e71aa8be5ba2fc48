//! In-memory wallets keyed by user id.
//!
//! Not backed by the database and lost on restart. The map locks per shard, so
//! concurrent writes for the same user are applied one after the other and none is
//! lost.

use std::sync::Arc;

use dashmap::DashMap;

use crate::models::wallet::WalletItem;

#[derive(Debug, Clone, Default)]
pub struct WalletStore {
    wallets: Arc<DashMap<i64, Vec<WalletItem>>>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of a user's wallet; empty for a user never seen.
    pub fn get(&self, user_id: i64) -> Vec<WalletItem> {
        self.wallets
            .get(&user_id)
            .map(|items| items.value().clone())
            .unwrap_or_default()
    }

    /// Append one item and return the wallet after the append.
    pub fn add(&self, user_id: i64, item: WalletItem) -> Vec<WalletItem> {
        let mut items = self.wallets.entry(user_id).or_default();
        items.push(item);
        items.value().clone()
    }

    /// Replace the whole wallet.
    pub fn replace(&self, user_id: i64, items: Vec<WalletItem>) -> Vec<WalletItem> {
        self.wallets.insert(user_id, items.clone());
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn item(kind: &str, n: i64) -> WalletItem {
        let mut details = Map::new();
        details.insert("n".to_string(), Value::from(n));
        WalletItem {
            kind: kind.to_string(),
            details,
        }
    }

    #[test]
    fn unknown_user_has_an_empty_wallet() {
        assert!(WalletStore::new().get(42).is_empty());
    }

    #[test]
    fn add_appends_and_replace_overwrites() {
        let store = WalletStore::new();
        store.add(1, item("card", 1));
        let after_add = store.add(1, item("savings", 2));
        assert_eq!(after_add, vec![item("card", 1), item("savings", 2)]);

        let replaced = store.replace(1, vec![item("savings", 3)]);
        assert_eq!(replaced, store.get(1));
        assert_eq!(store.get(1), vec![item("savings", 3)]);
        assert!(store.get(2).is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_for_one_user_are_all_kept() {
        let store = WalletStore::new();
        let handles: Vec<_> = (0..64)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.add(7, item("card", n));
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.get(7).len(), 64);
    }
}
