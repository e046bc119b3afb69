//! Transaction store accessor
//!
//! Resolves the snapshot a query runs against: the user's cached transaction
//! set and connected account list when a bank link exists, the canned demo
//! dataset otherwise. Reads are side-effect-free and always return copies,
//! so callers can filter and sort freely without touching stored state.

use std::sync::Arc;

use tracing::debug;

use crate::demo::{demo_accounts, demo_transactions};
use crate::error::Result;
use crate::models::{Account, Connection, Transaction, TransactionCache};
use crate::store::Store;

/// Snapshot resolution over a [`Store`]
#[derive(Clone)]
pub struct Accessor {
    store: Arc<dyn Store>,
}

impl Accessor {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// The underlying store, for collaborators that need the raw records
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Resolve the user's transaction snapshot
    ///
    /// Cached set if one exists, canned dataset otherwise.
    pub fn transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        match self.store.transaction_cache(user_id)? {
            Some(cache) => {
                debug!(
                    user_id,
                    count = cache.transactions.len(),
                    "Resolved cached transactions"
                );
                Ok(cache.transactions)
            }
            None => {
                debug!(user_id, "No cache, resolving demo transactions");
                Ok(demo_transactions())
            }
        }
    }

    /// Resolve the user's account snapshot
    ///
    /// The connection's last-known account list if a link exists, the two
    /// canned accounts otherwise.
    pub fn accounts(&self, user_id: &str) -> Result<Vec<Account>> {
        match self.store.connection(user_id)? {
            Some(connection) => {
                debug!(
                    user_id,
                    count = connection.accounts.len(),
                    "Resolved connected accounts"
                );
                Ok(connection.accounts)
            }
            None => {
                debug!(user_id, "No connection, resolving demo accounts");
                Ok(demo_accounts())
            }
        }
    }

    /// Overwrite the user's transaction cache
    ///
    /// Called on link and on explicit sync, never by queries.
    pub fn cache_transactions(
        &self,
        user_id: &str,
        transactions: Vec<Transaction>,
    ) -> Result<()> {
        debug!(user_id, count = transactions.len(), "Caching transactions");
        self.store
            .put_transaction_cache(user_id, TransactionCache::new(transactions))
    }

    /// Record a bank connection for the user
    pub fn put_connection(&self, user_id: &str, connection: Connection) -> Result<()> {
        debug!(user_id, item_id = %connection.item_id, "Storing connection");
        self.store.put_connection(user_id, connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::{AccountType, Category};
    use crate::store::MemoryStore;

    fn accessor() -> Accessor {
        Accessor::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_transactions_fall_back_to_demo() {
        let accessor = accessor();
        let transactions = accessor.transactions("nobody").unwrap();
        assert_eq!(transactions.len(), 20);
    }

    #[test]
    fn test_accounts_fall_back_to_demo() {
        let accessor = accessor();
        let accounts = accessor.accounts("nobody").unwrap();
        assert_eq!(accounts.len(), 2);
    }

    #[test]
    fn test_cache_round_trip() {
        let accessor = accessor();
        let cached = vec![Transaction {
            id: "txn_real".to_string(),
            date: "2026-03-01".to_string(),
            amount: -9.99,
            merchant: "Corner Store".to_string(),
            category: Category::Food,
            account: "Checking".to_string(),
            pending: None,
        }];

        accessor.cache_transactions("user_1", cached.clone()).unwrap();
        let resolved = accessor.transactions("user_1").unwrap();
        assert_eq!(resolved, cached);
    }

    #[test]
    fn test_cached_user_no_longer_sees_demo_data() {
        let accessor = accessor();
        accessor.cache_transactions("user_1", Vec::new()).unwrap();
        // An empty cached set is authoritative, not a fallback trigger
        assert!(accessor.transactions("user_1").unwrap().is_empty());
    }

    #[test]
    fn test_connected_accounts_resolve_from_connection() {
        let accessor = accessor();
        let account = Account {
            id: "real_acc".to_string(),
            name: "Real Checking".to_string(),
            account_type: AccountType::Depository,
            balance: 12.34,
            available_balance: None,
            institution: Some("Test Bank".to_string()),
        };
        accessor
            .put_connection(
                "user_1",
                Connection {
                    access_token: "access-token".to_string(),
                    item_id: "item_1".to_string(),
                    accounts: vec![account.clone()],
                    connected_at: Utc::now(),
                },
            )
            .unwrap();

        let accounts = accessor.accounts("user_1").unwrap();
        assert_eq!(accounts, vec![account]);
    }

    #[test]
    fn test_returned_copies_do_not_alias_store() {
        let accessor = accessor();
        accessor
            .cache_transactions("user_1", demo_transactions())
            .unwrap();

        let mut first = accessor.transactions("user_1").unwrap();
        first.clear();

        let second = accessor.transactions("user_1").unwrap();
        assert_eq!(second.len(), 20);
    }
}
