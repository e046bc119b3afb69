//! Tool implementations for the chat agent
//!
//! The query engine exposed as a fixed set of named, read-only operations
//! for an external language-model agent to invoke. The orchestration
//! collaborator hands the agent [`tool_definitions`] and routes each tool
//! call through [`dispatch`] with the user identifier it resolved itself;
//! the model never chooses the user.
//!
//! All tools are safe for LLM invocation: they only read the resolved
//! snapshot, and out-of-domain arguments (unknown categories, malformed
//! dates) match nothing instead of failing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accessor::Accessor;
use crate::error::{Error, Result};
use crate::filter::TransactionFilter;
use crate::models::{Account, Transaction};
use crate::summary::{
    self, BalanceSummary, CategorySpending, CategoryTotal, IncomeSummary,
};

/// Result cap when the agent doesn't ask for one
pub const DEFAULT_LIMIT: usize = 10;

// =============================================================================
// get_balance
// =============================================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct BalanceParams {}

pub fn get_balance(accessor: &Accessor, user_id: &str) -> Result<BalanceSummary> {
    let accounts = accessor.accounts(user_id)?;
    Ok(summary::total_balance(&accounts))
}

// =============================================================================
// get_spending_summary
// =============================================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SpendingSummaryParams {
    /// Inclusive start date (YYYY-MM-DD)
    #[schemars(description = "Start date in YYYY-MM-DD format, inclusive")]
    pub start_date: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[schemars(description = "End date in YYYY-MM-DD format, inclusive")]
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpendingSummaryResult {
    pub total_spending: f64,
    /// Per-category totals; categories with no spend are absent
    pub categories: std::collections::BTreeMap<crate::models::Category, CategoryTotal>,
}

pub fn get_spending_summary(
    accessor: &Accessor,
    user_id: &str,
    params: SpendingSummaryParams,
) -> Result<SpendingSummaryResult> {
    let transactions = accessor.transactions(user_id)?;
    let summary = summary::spending_summary(
        &transactions,
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    );

    Ok(SpendingSummaryResult {
        total_spending: summary.total(),
        categories: summary.categories,
    })
}

// =============================================================================
// get_income_summary
// =============================================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct IncomeSummaryParams {
    /// Inclusive start date (YYYY-MM-DD)
    #[schemars(description = "Start date in YYYY-MM-DD format, inclusive")]
    pub start_date: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[schemars(description = "End date in YYYY-MM-DD format, inclusive")]
    pub end_date: Option<String>,
}

pub fn get_income_summary(
    accessor: &Accessor,
    user_id: &str,
    params: IncomeSummaryParams,
) -> Result<IncomeSummary> {
    let transactions = accessor.transactions(user_id)?;
    Ok(summary::income_summary(
        &transactions,
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    ))
}

// =============================================================================
// search_transactions
// =============================================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SearchTransactionsParams {
    /// Filter by category name
    #[schemars(
        description = "Category: groceries, food, shopping, transport, utilities, entertainment, health, housing, travel, income, transfer, other"
    )]
    pub category: Option<String>,

    /// Substring match on the merchant name
    #[schemars(description = "Text to match against merchant names (case-insensitive substring)")]
    pub merchant: Option<String>,

    /// Inclusive start date (YYYY-MM-DD)
    #[schemars(description = "Start date in YYYY-MM-DD format, inclusive")]
    pub start_date: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[schemars(description = "End date in YYYY-MM-DD format, inclusive")]
    pub end_date: Option<String>,

    /// Inclusive lower bound on the signed amount
    #[schemars(
        description = "Minimum signed amount; use 0 to keep only money-in transactions"
    )]
    pub min_amount: Option<f64>,

    /// Inclusive upper bound on the signed amount
    #[schemars(description = "Maximum signed amount")]
    pub max_amount: Option<f64>,

    /// Substring match on the owning account
    #[schemars(description = "Account name to match (case-insensitive substring)")]
    pub account: Option<String>,

    /// Maximum number of results (default 10)
    #[schemars(description = "Maximum number of results to return (default 10)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResult {
    /// The most recent matches, newest first
    pub transactions: Vec<Transaction>,
    /// How many transactions matched before the limit was applied
    pub total_count: usize,
    /// Sum of absolute amounts across all matches
    pub total_amount: f64,
}

pub fn search_transactions(
    accessor: &Accessor,
    user_id: &str,
    params: SearchTransactionsParams,
) -> Result<TransactionsResult> {
    let transactions = accessor.transactions(user_id)?;

    let mut matched = TransactionFilter::new()
        .category(params.category.as_deref())
        .merchant(params.merchant.as_deref())
        .start_date(params.start_date.as_deref())
        .end_date(params.end_date.as_deref())
        .min_amount(params.min_amount)
        .max_amount(params.max_amount)
        .account(params.account.as_deref())
        .apply(transactions);

    let total_count = matched.len();
    let total_amount: f64 = matched.iter().map(|t| t.amount.abs()).sum();
    matched.truncate(params.limit.unwrap_or(DEFAULT_LIMIT));

    Ok(TransactionsResult {
        transactions: matched,
        total_count,
        total_amount,
    })
}

// =============================================================================
// get_category_spending
// =============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CategorySpendingParams {
    /// The category to drill into
    #[schemars(
        description = "Category: groceries, food, shopping, transport, utilities, entertainment, health, housing, travel, other"
    )]
    pub category: String,
}

pub fn get_category_spending(
    accessor: &Accessor,
    user_id: &str,
    params: CategorySpendingParams,
) -> Result<CategorySpending> {
    let transactions = accessor.transactions(user_id)?;
    Ok(summary::category_spending(&transactions, &params.category))
}

// =============================================================================
// get_recent_transactions
// =============================================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct RecentTransactionsParams {
    /// Maximum number of results (default 10)
    #[schemars(description = "Maximum number of transactions to return (default 10)")]
    pub limit: Option<usize>,
}

pub fn get_recent_transactions(
    accessor: &Accessor,
    user_id: &str,
    params: RecentTransactionsParams,
) -> Result<TransactionsResult> {
    search_transactions(
        accessor,
        user_id,
        SearchTransactionsParams {
            limit: Some(params.limit.unwrap_or(DEFAULT_LIMIT)),
            ..Default::default()
        },
    )
}

// =============================================================================
// get_accounts
// =============================================================================

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct AccountsParams {}

#[derive(Debug, Serialize)]
pub struct AccountsResult {
    pub accounts: Vec<Account>,
    pub count: usize,
}

pub fn get_accounts(accessor: &Accessor, user_id: &str) -> Result<AccountsResult> {
    let accounts = accessor.accounts(user_id)?;
    let count = accounts.len();
    Ok(AccountsResult { accounts, count })
}

// =============================================================================
// Tool definitions and dispatch
// =============================================================================

/// Tool definition handed to the language-model agent
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool's parameters
    pub input_schema: serde_json::Value,
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// All Quid tools, in the fixed order the agent sees them
pub fn tool_definitions() -> Vec<Tool> {
    vec![
        Tool::new(
            "get_balance",
            "Get current balances: checking total, credit owed, and net worth.",
            schemars::schema_for!(BalanceParams).into(),
        ),
        Tool::new(
            "get_spending_summary",
            "Get spending broken down by category, optionally bounded by a date range. \
             Income and transfers are never counted as spending.",
            schemars::schema_for!(SpendingSummaryParams).into(),
        ),
        Tool::new(
            "get_income_summary",
            "Get total income (paychecks and other money-in), optionally bounded by a date range.",
            schemars::schema_for!(IncomeSummaryParams).into(),
        ),
        Tool::new(
            "search_transactions",
            "Search transactions by category, merchant, date range, amount bounds, or account. \
             Returns the most recent matches first.",
            schemars::schema_for!(SearchTransactionsParams).into(),
        ),
        Tool::new(
            "get_category_spending",
            "Get total spending and the matching transactions for a single category.",
            schemars::schema_for!(CategorySpendingParams).into(),
        ),
        Tool::new(
            "get_recent_transactions",
            "Get the most recent transactions across all accounts and categories.",
            schemars::schema_for!(RecentTransactionsParams).into(),
        ),
        Tool::new(
            "get_accounts",
            "List the user's bank accounts with balances and institutions.",
            schemars::schema_for!(AccountsParams).into(),
        ),
    ]
}

/// Invoke a tool by name with JSON parameters
///
/// The single entry point the orchestration collaborator routes tool calls
/// through. The user identifier is supplied by the caller, never by the
/// model. Unknown tool names are the only dispatch-level error; anything
/// else out-of-domain degrades to an empty result.
pub fn dispatch(
    accessor: &Accessor,
    user_id: &str,
    tool: &str,
    input: serde_json::Value,
) -> Result<serde_json::Value> {
    debug!(user_id, tool, "Dispatching tool call");

    let result = match tool {
        "get_balance" => serde_json::to_value(get_balance(accessor, user_id)?)?,
        "get_spending_summary" => {
            let params: SpendingSummaryParams = serde_json::from_value(input)?;
            serde_json::to_value(get_spending_summary(accessor, user_id, params)?)?
        }
        "get_income_summary" => {
            let params: IncomeSummaryParams = serde_json::from_value(input)?;
            serde_json::to_value(get_income_summary(accessor, user_id, params)?)?
        }
        "search_transactions" => {
            let params: SearchTransactionsParams = serde_json::from_value(input)?;
            serde_json::to_value(search_transactions(accessor, user_id, params)?)?
        }
        "get_category_spending" => {
            let params: CategorySpendingParams = serde_json::from_value(input)?;
            serde_json::to_value(get_category_spending(accessor, user_id, params)?)?
        }
        "get_recent_transactions" => {
            let params: RecentTransactionsParams = serde_json::from_value(input)?;
            serde_json::to_value(get_recent_transactions(accessor, user_id, params)?)?
        }
        "get_accounts" => serde_json::to_value(get_accounts(accessor, user_id)?)?,
        other => return Err(Error::UnknownTool(other.to_string())),
    };

    Ok(result)
}
