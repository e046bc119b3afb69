//! Transaction filter builder
//!
//! Builder for composing transaction query criteria. Criteria compose
//! conjunctively; the result is sorted most-recent-first and optionally
//! truncated. All matching is permissive: an unknown category or a date the
//! lexicographic comparison can't order sensibly simply matches nothing,
//! which is the contract the language-model agent relies on.
//!
//! The lifetime `'query` represents how long the borrowed criteria
//! (category, merchant, date bounds, account) must remain valid.

use crate::models::Transaction;

/// Builder for transaction query criteria
#[derive(Debug, Default)]
pub struct TransactionFilter<'query> {
    pub category: Option<&'query str>,
    pub merchant: Option<&'query str>,
    pub start_date: Option<&'query str>,
    pub end_date: Option<&'query str>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub account: Option<&'query str>,
    pub limit: Option<usize>,
}

impl<'query> TransactionFilter<'query> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact category match, case-insensitive
    pub fn category(mut self, category: Option<&'query str>) -> Self {
        self.category = category;
        self
    }

    /// Case-insensitive substring match on the merchant name
    pub fn merchant(mut self, merchant: Option<&'query str>) -> Self {
        self.merchant = merchant;
        self
    }

    /// Inclusive lower date bound (YYYY-MM-DD, lexicographic)
    pub fn start_date(mut self, date: Option<&'query str>) -> Self {
        self.start_date = date;
        self
    }

    /// Inclusive upper date bound (YYYY-MM-DD, lexicographic)
    pub fn end_date(mut self, date: Option<&'query str>) -> Self {
        self.end_date = date;
        self
    }

    /// Inclusive lower bound on the signed amount
    pub fn min_amount(mut self, amount: Option<f64>) -> Self {
        self.min_amount = amount;
        self
    }

    /// Inclusive upper bound on the signed amount
    pub fn max_amount(mut self, amount: Option<f64>) -> Self {
        self.max_amount = amount;
        self
    }

    /// Case-insensitive substring match on the owning account
    pub fn account(mut self, account: Option<&'query str>) -> Self {
        self.account = account;
        self
    }

    /// Keep only the first N results, applied after sorting
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Whether a single transaction satisfies every set criterion
    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(category) = self.category {
            if !t.category.as_str().eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }

        if let Some(merchant) = self.merchant {
            if !t
                .merchant
                .to_lowercase()
                .contains(&merchant.trim().to_lowercase())
            {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if t.date.as_str() < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if t.date.as_str() > end {
                return false;
            }
        }

        if let Some(min) = self.min_amount {
            if t.amount < min {
                return false;
            }
        }

        if let Some(max) = self.max_amount {
            if t.amount > max {
                return false;
            }
        }

        if let Some(account) = self.account {
            if !t
                .account
                .to_lowercase()
                .contains(&account.trim().to_lowercase())
            {
                return false;
            }
        }

        true
    }

    /// Filter, sort most-recent-first, and truncate
    ///
    /// The sort is stable, so transactions sharing a date keep their
    /// original relative order.
    pub fn apply(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        let mut matched: Vec<Transaction> = transactions
            .into_iter()
            .filter(|t| self.matches(t))
            .collect();

        matched.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }

        matched
    }
}
