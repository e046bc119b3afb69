//! Mock bank-data provider
//!
//! Predictable provider for tests and the CLI sync demo; no network. Can be
//! configured with custom data or made to fail fetches.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{Account, AccountType, Transaction};

use super::{normalize_category, BankProvider, ProviderCredentials, ProviderData};

/// Mock provider returning a small fixed "live" dataset
#[derive(Clone, Default)]
pub struct MockProvider {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    /// Whether fetch should fail, to simulate provider outages
    pub fail_fetch: bool,
}

impl MockProvider {
    /// A healthy provider with sample linked-account data
    pub fn new() -> Self {
        Self {
            accounts: sample_accounts(),
            transactions: sample_transactions(),
            fail_fetch: false,
        }
    }

    /// A provider whose fetches always fail
    pub fn failing() -> Self {
        Self {
            fail_fetch: true,
            ..Self::new()
        }
    }

    /// A provider returning exactly the given data
    pub fn with_data(accounts: Vec<Account>, transactions: Vec<Transaction>) -> Self {
        Self {
            accounts,
            transactions,
            fail_fetch: false,
        }
    }
}

#[async_trait]
impl BankProvider for MockProvider {
    async fn link_token(&self, user_id: &str) -> Result<String> {
        Ok(format!("link-sandbox-{}", user_id))
    }

    async fn exchange_public_token(&self, public_token: &str) -> Result<ProviderCredentials> {
        Ok(ProviderCredentials {
            access_token: format!("access-sandbox-{}", public_token),
            item_id: "item-sandbox".to_string(),
        })
    }

    async fn fetch(&self, _access_token: &str) -> Result<ProviderData> {
        if self.fail_fetch {
            return Err(Error::Provider("provider unreachable".to_string()));
        }

        Ok(ProviderData {
            accounts: self.accounts.clone(),
            transactions: self.transactions.clone(),
        })
    }
}

fn sample_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "mock_checking".to_string(),
            name: "Sandbox Checking".to_string(),
            account_type: AccountType::from_provider("depository"),
            balance: 1875.40,
            available_balance: Some(1820.15),
            institution: Some("Sandbox Bank".to_string()),
        },
        Account {
            id: "mock_credit".to_string(),
            name: "Sandbox Card".to_string(),
            account_type: AccountType::from_provider("credit"),
            balance: -312.77,
            available_balance: None,
            institution: Some("Sandbox Bank".to_string()),
        },
    ]
}

fn sample_transactions() -> Vec<Transaction> {
    // Raw provider categories on purpose, normalized on the way in
    let raw = [
        ("mock_txn_1", "2026-02-02", "Blue Bottle Coffee", -5.25, "FOOD_AND_DRINK"),
        ("mock_txn_2", "2026-02-03", "Safeway", -64.10, "SUPERMARKETS_AND_GROCERIES"),
        ("mock_txn_3", "2026-02-05", "Sandbox Payroll", 1950.00, "INCOME"),
        ("mock_txn_4", "2026-02-06", "BART Clipper", -20.00, "TRANSPORTATION"),
        ("mock_txn_5", "2026-02-08", "Savings Transfer", 250.00, "TRANSFER_IN"),
    ];

    raw.iter()
        .map(|(id, date, merchant, amount, category)| Transaction {
            id: id.to_string(),
            date: date.to_string(),
            amount: *amount,
            merchant: merchant.to_string(),
            category: normalize_category(category),
            account: "Sandbox Checking".to_string(),
            pending: None,
        })
        .collect()
}
