//! Canned demo dataset
//!
//! Served by the accessor whenever a user has no cached transaction set or
//! bank connection, so unauthenticated/demo exploration always has data to
//! chat about. Twenty transactions spanning every category, plus one
//! checking and one credit account.

use crate::models::{Account, AccountType, Category, Transaction};

const CHECKING: &str = "Everyday Checking";
const CREDIT: &str = "Rewards Credit Card";

fn tx(
    id: &str,
    date: &str,
    merchant: &str,
    amount: f64,
    category: Category,
    account: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date.to_string(),
        amount,
        merchant: merchant.to_string(),
        category,
        account: account.to_string(),
        pending: None,
    }
}

/// The fixed demo transaction set
pub fn demo_transactions() -> Vec<Transaction> {
    let mut transactions = vec![
        tx("txn_001", "2026-01-02", "Whole Foods Market", -45.67, Category::Groceries, CREDIT),
        tx("txn_002", "2026-01-03", "Chipotle", -18.25, Category::Food, CREDIT),
        tx("txn_003", "2026-01-05", "Acme Corp Payroll", 2400.00, Category::Income, CHECKING),
        tx("txn_004", "2026-01-06", "Uber", -24.80, Category::Transport, CREDIT),
        tx("txn_005", "2026-01-07", "Amazon", -62.99, Category::Shopping, CREDIT),
        tx("txn_006", "2026-01-08", "City Power & Light", -110.42, Category::Utilities, CHECKING),
        tx("txn_007", "2026-01-10", "Trader Joe's", -78.50, Category::Groceries, CREDIT),
        tx("txn_008", "2026-01-11", "AMC Theatres", -25.00, Category::Entertainment, CREDIT),
        tx("txn_009", "2026-01-12", "Netflix", -15.99, Category::Entertainment, CREDIT),
        tx("txn_010", "2026-01-13", "CVS Pharmacy", -32.45, Category::Health, CREDIT),
        tx("txn_011", "2026-01-15", "Oakwood Apartments", -1450.00, Category::Housing, CHECKING),
        tx("txn_012", "2026-01-15", "Maker Studio Invoice", 600.00, Category::Income, CHECKING),
        tx("txn_013", "2026-01-16", "Delta Air Lines", -289.60, Category::Travel, CREDIT),
        tx("txn_014", "2026-01-17", "Starbucks", -6.75, Category::Food, CREDIT),
        tx("txn_015", "2026-01-19", "Shell", -48.30, Category::Transport, CREDIT),
        tx("txn_016", "2026-01-20", "USPS", -12.40, Category::Other, CHECKING),
        tx("txn_017", "2026-01-27", "Safeway", -95.97, Category::Groceries, CREDIT),
        tx("txn_018", "2026-01-24", "Savings Transfer", 500.00, Category::Transfer, CHECKING),
        tx("txn_019", "2026-01-26", "Target", -54.12, Category::Shopping, CREDIT),
        tx("txn_020", "2026-01-28", "Comcast", -79.99, Category::Utilities, CHECKING),
    ];

    // Most recent charge hasn't settled yet
    if let Some(last) = transactions.last_mut() {
        last.pending = Some(true);
    }

    transactions
}

/// The fixed demo account pair
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "acc_checking".to_string(),
            name: CHECKING.to_string(),
            account_type: AccountType::Checking,
            balance: 4250.33,
            available_balance: Some(4180.12),
            institution: Some("Horizon Bank".to_string()),
        },
        Account {
            id: "acc_credit".to_string(),
            name: CREDIT.to_string(),
            account_type: AccountType::Credit,
            balance: -892.48,
            available_balance: None,
            institution: Some("Horizon Bank".to_string()),
        },
    ]
}
