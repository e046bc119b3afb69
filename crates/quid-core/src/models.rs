//! Domain models for Quid

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Spending categories
///
/// Closed set; every transaction carries exactly one. Provider categories
/// that don't map cleanly are normalized to `Other` before they reach the
/// query engine (see [`crate::provider::normalize_category`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Groceries,
    Food,
    Shopping,
    Transport,
    Utilities,
    Entertainment,
    Health,
    Housing,
    Travel,
    Income,
    Transfer,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::Food => "food",
            Self::Shopping => "shopping",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::Housing => "housing",
            Self::Travel => "travel",
            Self::Income => "income",
            Self::Transfer => "transfer",
            Self::Other => "other",
        }
    }

    /// All categories, in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::Groceries,
            Self::Food,
            Self::Shopping,
            Self::Transport,
            Self::Utilities,
            Self::Entertainment,
            Self::Health,
            Self::Housing,
            Self::Travel,
            Self::Income,
            Self::Transfer,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "groceries" => Ok(Self::Groceries),
            "food" => Ok(Self::Food),
            "shopping" => Ok(Self::Shopping),
            "transport" => Ok(Self::Transport),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "health" => Ok(Self::Health),
            "housing" => Ok(Self::Housing),
            "travel" => Ok(Self::Travel),
            "income" => Ok(Self::Income),
            "transfer" => Ok(Self::Transfer),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account types
///
/// Only checking-like and credit accounts participate in balance figures;
/// anything else is carried but contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Depository,
    Credit,
    Other,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Depository => "depository",
            Self::Credit => "credit",
            Self::Other => "other",
        }
    }

    /// Checking and depository accounts are interchangeable for balances
    pub fn is_checking_like(&self) -> bool {
        matches!(self, Self::Checking | Self::Depository)
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Normalize a provider account type string; unknown types become `Other`
    pub fn from_provider(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "checking" => Self::Checking,
            "depository" => Self::Depository,
            "credit" | "credit card" => Self::Credit,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bank transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier, stable across fetches for the same event
    pub id: String,
    /// ISO-8601 date (YYYY-MM-DD, zero-padded); compared lexicographically
    pub date: String,
    /// Negative = money out, positive = money in
    pub amount: f64,
    pub merchant: String,
    pub category: Category,
    /// Identifier or display name of the owning account
    pub account: String,
    /// Whether the transaction has settled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
}

/// A bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: AccountType,
    /// Signed; credit balances represent amount owed and are expected negative
    pub balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

/// A user's link to the bank-data provider
///
/// Created on successful link, read on every sync or data access. There is
/// no disconnect path yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Provider access credential
    pub access_token: String,
    /// Provider item identifier
    pub item_id: String,
    /// Last-known account list
    pub accounts: Vec<Account>,
    pub connected_at: DateTime<Utc>,
}

/// The most recently fetched transaction set for a user
///
/// Overwritten on link and on explicit sync; once present it is the data
/// source for all queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionCache {
    pub transactions: Vec<Transaction>,
    pub cached_at: DateTime<Utc>,
}

impl TransactionCache {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            cached_at: Utc::now(),
        }
    }
}
