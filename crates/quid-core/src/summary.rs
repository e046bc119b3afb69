//! Derived aggregates over a transaction/account snapshot
//!
//! Pure reductions: balances across accounts, spending grouped by category,
//! income totals, and single-category drill-down. None of these mutate their
//! input, and an empty eligible set always produces a zeroed result rather
//! than an error.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Account, Category, Transaction};

/// Balance figures across all accounts
///
/// Only checking-like and credit accounts are counted; other account types
/// (investment, loan) contribute to none of the three figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSummary {
    /// Sum of checking-like balances
    pub checking: f64,
    /// Amount owed on credit accounts, reported positive
    pub credit_owed: f64,
    /// Checking plus signed credit balances
    pub net_worth: f64,
}

/// Per-category spend figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Sum of absolute amounts
    pub total: f64,
    pub count: usize,
}

/// Spending grouped by category
///
/// Categories with no eligible transactions are absent, not present with
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SpendingSummary {
    pub categories: BTreeMap<Category, CategoryTotal>,
}

impl SpendingSummary {
    /// Total spend across all categories
    pub fn total(&self) -> f64 {
        self.categories.values().map(|c| c.total).sum()
    }
}

/// Income figures plus the matched transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeSummary {
    pub total: f64,
    pub count: usize,
    pub transactions: Vec<Transaction>,
}

/// Spend figures for a single category plus the matched transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub total: f64,
    pub count: usize,
    pub transactions: Vec<Transaction>,
}

fn in_range(date: &str, start: Option<&str>, end: Option<&str>) -> bool {
    if let Some(start) = start {
        if date < start {
            return false;
        }
    }
    if let Some(end) = end {
        if date > end {
            return false;
        }
    }
    true
}

/// Sum account balances into checking, owed-credit, and net-worth figures
pub fn total_balance(accounts: &[Account]) -> BalanceSummary {
    let checking: f64 = accounts
        .iter()
        .filter(|a| a.account_type.is_checking_like())
        .map(|a| a.balance)
        .sum();

    let credit: f64 = accounts
        .iter()
        .filter(|a| a.account_type.is_credit())
        .map(|a| a.balance)
        .sum();

    BalanceSummary {
        checking,
        credit_owed: credit.abs(),
        net_worth: checking + credit,
    }
}

/// Group spend by category within an optional inclusive date range
///
/// Eligible transactions are money-out (`amount < 0`) and neither `income`
/// nor `transfer`; the sign convention alone decides direction, the category
/// exclusion keeps paychecks and account transfers out of spend figures even
/// when a provider reports them negative.
pub fn spending_summary(
    transactions: &[Transaction],
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> SpendingSummary {
    let mut categories: BTreeMap<Category, CategoryTotal> = BTreeMap::new();

    for t in transactions {
        if t.amount >= 0.0 {
            continue;
        }
        if matches!(t.category, Category::Income | Category::Transfer) {
            continue;
        }
        if !in_range(&t.date, start_date, end_date) {
            continue;
        }

        let entry = categories
            .entry(t.category)
            .or_insert(CategoryTotal { total: 0.0, count: 0 });
        entry.total += t.amount.abs();
        entry.count += 1;
    }

    SpendingSummary { categories }
}

/// Total income within an optional inclusive date range
///
/// Eligible transactions are category `income` or any positive amount, so
/// transfers-in count as money-in here.
pub fn income_summary(
    transactions: &[Transaction],
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> IncomeSummary {
    let matched: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.category == Category::Income || t.amount > 0.0)
        .filter(|t| in_range(&t.date, start_date, end_date))
        .cloned()
        .collect();

    IncomeSummary {
        total: matched.iter().map(|t| t.amount.abs()).sum(),
        count: matched.len(),
        transactions: matched,
    }
}

/// Spend drill-down for one category (case-insensitive)
///
/// Unknown category strings match nothing and yield a zeroed result.
pub fn category_spending(transactions: &[Transaction], category: &str) -> CategorySpending {
    let wanted = category.trim();

    let matched: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.category.as_str().eq_ignore_ascii_case(wanted) && t.amount < 0.0)
        .cloned()
        .collect();

    CategorySpending {
        total: matched.iter().map(|t| t.amount.abs()).sum(),
        count: matched.len(),
        transactions: matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{demo_accounts, demo_transactions};
    use crate::models::AccountType;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_total_balance_demo_accounts() {
        let balance = total_balance(&demo_accounts());
        assert!(close(balance.checking, 4250.33));
        assert!(close(balance.credit_owed, 892.48));
        assert!(close(balance.net_worth, 3357.85));
    }

    #[test]
    fn test_total_balance_empty() {
        let balance = total_balance(&[]);
        assert_eq!(balance.checking, 0.0);
        assert_eq!(balance.credit_owed, 0.0);
        assert_eq!(balance.net_worth, 0.0);
    }

    #[test]
    fn test_total_balance_additive() {
        let mut accounts = demo_accounts();
        let before = total_balance(&accounts);

        accounts.push(Account {
            id: "acc_extra".to_string(),
            name: "Second Checking".to_string(),
            account_type: AccountType::Depository,
            balance: 100.0,
            available_balance: None,
            institution: None,
        });
        let after = total_balance(&accounts);
        assert!(close(after.checking, before.checking + 100.0));
        assert!(close(after.net_worth, before.net_worth + 100.0));
        assert!(close(after.credit_owed, before.credit_owed));

        accounts.push(Account {
            id: "acc_extra_credit".to_string(),
            name: "Second Card".to_string(),
            account_type: AccountType::Credit,
            balance: -50.0,
            available_balance: None,
            institution: None,
        });
        let with_credit = total_balance(&accounts);
        assert!(close(with_credit.credit_owed, after.credit_owed + 50.0));
        assert!(close(with_credit.net_worth, after.net_worth - 50.0));
    }

    #[test]
    fn test_total_balance_ignores_other_types() {
        let mut accounts = demo_accounts();
        let before = total_balance(&accounts);
        accounts.push(Account {
            id: "acc_brokerage".to_string(),
            name: "Brokerage".to_string(),
            account_type: AccountType::Other,
            balance: 99999.0,
            available_balance: None,
            institution: None,
        });
        assert_eq!(total_balance(&accounts), before);
    }

    #[test]
    fn test_spending_summary_excludes_income_and_transfer() {
        let summary = spending_summary(&demo_transactions(), None, None);
        assert!(!summary.categories.contains_key(&Category::Income));
        assert!(!summary.categories.contains_key(&Category::Transfer));
    }

    #[test]
    fn test_spending_summary_groceries() {
        let summary = spending_summary(&demo_transactions(), None, None);
        let groceries = &summary.categories[&Category::Groceries];
        assert!(close(groceries.total, 220.14));
        assert_eq!(groceries.count, 3);
    }

    #[test]
    fn test_spending_summary_total_matches_eligible_sum() {
        let transactions = demo_transactions();
        let summary = spending_summary(&transactions, None, None);
        let expected: f64 = transactions
            .iter()
            .filter(|t| {
                t.amount < 0.0
                    && !matches!(t.category, Category::Income | Category::Transfer)
            })
            .map(|t| t.amount.abs())
            .sum();
        assert!(close(summary.total(), expected));
    }

    #[test]
    fn test_spending_summary_omits_empty_categories() {
        // Bound the range to a single groceries purchase
        let summary =
            spending_summary(&demo_transactions(), Some("2026-01-02"), Some("2026-01-02"));
        assert_eq!(summary.categories.len(), 1);
        assert!(summary.categories.contains_key(&Category::Groceries));
    }

    #[test]
    fn test_spending_summary_empty_input() {
        let summary = spending_summary(&[], None, None);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.total(), 0.0);
    }

    #[test]
    fn test_income_summary_demo() {
        let summary = income_summary(&demo_transactions(), None, None);
        // Two paychecks plus the transfer-in
        assert_eq!(summary.count, 3);
        assert!(close(summary.total, 2400.00 + 600.00 + 500.00));
    }

    #[test]
    fn test_income_summary_date_bounded() {
        let summary =
            income_summary(&demo_transactions(), Some("2026-01-10"), Some("2026-01-20"));
        assert_eq!(summary.count, 1);
        assert!(close(summary.total, 600.00));
    }

    #[test]
    fn test_income_summary_negative_income_still_counts() {
        // A payroll correction: category income, negative amount
        let transactions = vec![Transaction {
            id: "txn_reversal".to_string(),
            date: "2026-02-01".to_string(),
            amount: -120.0,
            merchant: "Acme Corp Payroll".to_string(),
            category: Category::Income,
            account: "Everyday Checking".to_string(),
            pending: None,
        }];
        let summary = income_summary(&transactions, None, None);
        assert_eq!(summary.count, 1);
        assert!(close(summary.total, 120.0));
    }

    #[test]
    fn test_category_spending_entertainment() {
        let result = category_spending(&demo_transactions(), "entertainment");
        assert!(close(result.total, 40.99));
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_category_spending_case_insensitive() {
        let result = category_spending(&demo_transactions(), "Entertainment");
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_category_spending_unknown_category() {
        let result = category_spending(&demo_transactions(), "crypto");
        assert_eq!(result.count, 0);
        assert_eq!(result.total, 0.0);
        assert!(result.transactions.is_empty());
    }

    #[test]
    fn test_category_spending_income_excluded_by_sign() {
        // income transactions are positive, so amount < 0 filters them out
        let result = category_spending(&demo_transactions(), "income");
        assert_eq!(result.count, 0);
    }
}
