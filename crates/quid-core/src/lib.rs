//! Quid Core Library
//!
//! Shared functionality for Quid, the chat assistant for personal bank data:
//! - Domain models and the closed category set
//! - Keyed store abstraction (in-memory and JSON-file backed)
//! - Transaction store accessor with canned-dataset fallback
//! - Query/aggregation engine: filtering, balances, spending and income summaries
//! - Bank-data provider seam with category normalization
//! - Read-only tool layer for language-model agents
//! - Bounded chat history log

pub mod accessor;
pub mod demo;
pub mod error;
pub mod filter;
pub mod history;
pub mod models;
pub mod provider;
pub mod store;
pub mod summary;
pub mod tools;

pub use accessor::Accessor;
pub use error::{Error, Result};
pub use filter::TransactionFilter;
pub use history::{ChatLog, ChatMessage};
pub use models::{Account, AccountType, Category, Connection, Transaction, TransactionCache};
pub use provider::{normalize_category, BankProvider, MockProvider, SyncReport};
pub use store::{JsonStore, MemoryStore, Store};
pub use summary::{BalanceSummary, CategorySpending, CategoryTotal, IncomeSummary, SpendingSummary};
pub use tools::{dispatch, tool_definitions, Tool};
