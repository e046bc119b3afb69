//! Bank-data provider seam
//!
//! The contract the core consumes from whatever service supplies real
//! account data: issue a link token, exchange the public token from the link
//! flow for an access credential, and fetch the current accounts and
//! transactions for that credential. Implementations own all HTTP plumbing
//! and must normalize their category taxonomy through
//! [`normalize_category`] before data reaches the query engine.

mod mock;

pub use mock::MockProvider;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::accessor::Accessor;
use crate::error::{Error, Result};
use crate::models::{Account, Category, Connection, Transaction};

/// Credential pair returned by the public-token exchange
#[derive(Debug, Clone)]
pub struct ProviderCredentials {
    pub access_token: String,
    pub item_id: String,
}

/// One fetch of a user's current bank data
#[derive(Debug, Clone)]
pub struct ProviderData {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
}

/// External bank-data provider
#[async_trait]
pub trait BankProvider: Send + Sync {
    /// Issue a link token for the user to start the link flow
    async fn link_token(&self, user_id: &str) -> Result<String>;

    /// Exchange the public token produced by a completed link flow
    async fn exchange_public_token(&self, public_token: &str) -> Result<ProviderCredentials>;

    /// Fetch the current account and transaction data for a credential
    ///
    /// Returned categories must already be normalized into the closed
    /// [`Category`] set.
    async fn fetch(&self, access_token: &str) -> Result<ProviderData>;
}

/// Map a provider category string into the closed category set
///
/// Total: anything unrecognized becomes `Other`. Accepts both the internal
/// names and the provider's taxonomy (`FOOD_AND_DRINK`, `TRANSFER_IN`, ...),
/// case-insensitively.
pub fn normalize_category(provider_category: &str) -> Category {
    let key = provider_category.trim().to_lowercase().replace([' ', '-'], "_");

    match key.as_str() {
        "groceries" | "supermarkets_and_groceries" => Category::Groceries,
        "food" | "food_and_drink" | "restaurants" | "dining" | "fast_food" | "coffee" => {
            Category::Food
        }
        "shopping" | "shops" | "general_merchandise" | "clothing" => Category::Shopping,
        "transport" | "transportation" | "taxi" | "gas_stations" | "automotive" => {
            Category::Transport
        }
        "utilities" | "rent_and_utilities" | "telecommunication_services" => Category::Utilities,
        "entertainment" | "recreation" => Category::Entertainment,
        "health" | "healthcare" | "medical" | "personal_care" | "pharmacies" => Category::Health,
        "housing" | "rent" | "mortgage" | "home_improvement" => Category::Housing,
        "travel" | "airlines_and_aviation" | "lodging" => Category::Travel,
        "income" | "payroll" => Category::Income,
        "transfer" | "transfer_in" | "transfer_out" => Category::Transfer,
        _ => Category::Other,
    }
}

/// Outcome of a completed sync
#[derive(Debug, Clone, serde::Serialize)]
pub struct SyncReport {
    pub accounts: usize,
    pub transactions: usize,
}

/// Complete a link flow: exchange the public token, store the connection,
/// and prime the transaction cache
pub async fn link_user(
    accessor: &Accessor,
    provider: &dyn BankProvider,
    user_id: &str,
    public_token: &str,
) -> Result<SyncReport> {
    let credentials = provider.exchange_public_token(public_token).await?;
    let data = provider.fetch(&credentials.access_token).await?;

    accessor.put_connection(
        user_id,
        Connection {
            access_token: credentials.access_token,
            item_id: credentials.item_id,
            accounts: data.accounts.clone(),
            connected_at: chrono::Utc::now(),
        },
    )?;
    accessor.cache_transactions(user_id, data.transactions.clone())?;

    info!(
        user_id,
        accounts = data.accounts.len(),
        transactions = data.transactions.len(),
        "Linked bank connection"
    );

    Ok(SyncReport {
        accounts: data.accounts.len(),
        transactions: data.transactions.len(),
    })
}

/// Refresh a linked user's cached data from the provider
///
/// A fetch failure is surfaced as a single error and leaves the previously
/// cached state untouched; nothing is written until the fetch succeeds.
pub async fn sync_user(
    accessor: &Accessor,
    provider: &dyn BankProvider,
    user_id: &str,
) -> Result<SyncReport> {
    let connection = accessor
        .store()
        .connection(user_id)?
        .ok_or_else(|| Error::NotLinked(user_id.to_string()))?;

    let data = match provider.fetch(&connection.access_token).await {
        Ok(data) => data,
        Err(e) => {
            warn!(user_id, error = %e, "Provider fetch failed, cache left as-is");
            return Err(e);
        }
    };

    accessor.put_connection(
        user_id,
        Connection {
            accounts: data.accounts.clone(),
            ..connection
        },
    )?;
    accessor.cache_transactions(user_id, data.transactions.clone())?;

    info!(
        user_id,
        accounts = data.accounts.len(),
        transactions = data.transactions.len(),
        "Synced bank data"
    );

    Ok(SyncReport {
        accounts: data.accounts.len(),
        transactions: data.transactions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::store::{MemoryStore, Store};

    #[test]
    fn test_normalize_category_provider_taxonomy() {
        assert_eq!(normalize_category("FOOD_AND_DRINK"), Category::Food);
        assert_eq!(normalize_category("TRANSFER_IN"), Category::Transfer);
        assert_eq!(normalize_category("RENT_AND_UTILITIES"), Category::Utilities);
        assert_eq!(normalize_category("AIRLINES_AND_AVIATION"), Category::Travel);
    }

    #[test]
    fn test_normalize_category_internal_names_pass_through() {
        for category in Category::all() {
            assert_eq!(normalize_category(category.as_str()), *category);
        }
    }

    #[test]
    fn test_normalize_category_is_total() {
        assert_eq!(normalize_category("CRYPTOCURRENCY"), Category::Other);
        assert_eq!(normalize_category(""), Category::Other);
        assert_eq!(normalize_category("   "), Category::Other);
    }

    #[test]
    fn test_normalize_category_separator_variants() {
        assert_eq!(normalize_category("food and drink"), Category::Food);
        assert_eq!(normalize_category("transfer-in"), Category::Transfer);
    }

    #[tokio::test]
    async fn test_link_user_stores_connection_and_cache() {
        let store = Arc::new(MemoryStore::new());
        let accessor = Accessor::new(store.clone());
        let provider = MockProvider::new();

        let report = link_user(&accessor, &provider, "user_1", "public-sandbox-token")
            .await
            .unwrap();
        assert!(report.transactions > 0);

        let connection = store.connection("user_1").unwrap().unwrap();
        assert!(connection.access_token.contains("public-sandbox-token"));
        assert!(!connection.accounts.is_empty());
        assert!(store.transaction_cache("user_1").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sync_unlinked_user_fails() {
        let accessor = Accessor::new(Arc::new(MemoryStore::new()));
        let provider = MockProvider::new();

        let result = sync_user(&accessor, &provider, "user_1").await;
        assert!(matches!(result, Err(Error::NotLinked(_))));
    }

    #[tokio::test]
    async fn test_sync_failure_leaves_cache_untouched() {
        let store = Arc::new(MemoryStore::new());
        let accessor = Accessor::new(store.clone());

        link_user(&accessor, &MockProvider::new(), "user_1", "tok")
            .await
            .unwrap();
        let before = store.transaction_cache("user_1").unwrap().unwrap();

        let result = sync_user(&accessor, &MockProvider::failing(), "user_1").await;
        assert!(matches!(result, Err(Error::Provider(_))));

        let after = store.transaction_cache("user_1").unwrap().unwrap();
        assert_eq!(after.transactions, before.transactions);
    }

    #[tokio::test]
    async fn test_sync_refreshes_cache() {
        let store = Arc::new(MemoryStore::new());
        let accessor = Accessor::new(store.clone());
        let provider = MockProvider::new();

        link_user(&accessor, &provider, "user_1", "tok").await.unwrap();
        accessor.cache_transactions("user_1", Vec::new()).unwrap();

        let report = sync_user(&accessor, &provider, "user_1").await.unwrap();
        assert!(report.transactions > 0);
        let cache = store.transaction_cache("user_1").unwrap().unwrap();
        assert_eq!(cache.transactions.len(), report.transactions);
    }
}
