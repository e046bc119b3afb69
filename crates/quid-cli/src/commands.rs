//! Command implementations
//!
//! Each command is a thin wrapper over one tool operation: build params,
//! invoke, render. `--json` prints exactly what the agent would receive.

use anyhow::{Context, Result};
use quid_core::accessor::Accessor;
use quid_core::provider::{link_user, sync_user, BankProvider, MockProvider};
use quid_core::store::Store;
use quid_core::tools::{
    self, CategorySpendingParams, IncomeSummaryParams, RecentTransactionsParams,
    SearchTransactionsParams, SpendingSummaryParams,
};
use quid_core::Transaction;

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to render result as JSON")?
    );
    Ok(())
}

fn print_transaction_line(t: &Transaction) {
    let pending = if t.pending == Some(true) { "  (pending)" } else { "" };
    println!(
        "   {}  {:<22} {:>10.2}  {:<13} {}{}",
        t.date,
        truncate(&t.merchant, 22),
        t.amount,
        t.category.as_str(),
        t.account,
        pending
    );
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}

pub fn cmd_balance(accessor: &Accessor, user: &str, json: bool) -> Result<()> {
    let balance = tools::get_balance(accessor, user)?;
    if json {
        return print_json(&balance);
    }

    println!();
    println!("💰 Balance");
    println!("   Checking:    ${:>10.2}", balance.checking);
    println!("   Credit owed: ${:>10.2}", balance.credit_owed);
    println!("   Net worth:   ${:>10.2}", balance.net_worth);
    Ok(())
}

pub fn cmd_accounts(accessor: &Accessor, user: &str, json: bool) -> Result<()> {
    let result = tools::get_accounts(accessor, user)?;
    if json {
        return print_json(&result);
    }

    println!();
    println!("🏦 Accounts ({})", result.count);
    for account in &result.accounts {
        let institution = account.institution.as_deref().unwrap_or("-");
        println!(
            "   {:<22} {:<10} {:>10.2}   {}",
            truncate(&account.name, 22),
            account.account_type.as_str(),
            account.balance,
            institution
        );
        if let Some(available) = account.available_balance {
            println!("   {:<22} available {:>9.2}", "", available);
        }
    }
    Ok(())
}

pub fn cmd_spending(
    accessor: &Accessor,
    user: &str,
    from: Option<String>,
    to: Option<String>,
    json: bool,
) -> Result<()> {
    let result = tools::get_spending_summary(
        accessor,
        user,
        SpendingSummaryParams {
            start_date: from,
            end_date: to,
        },
    )?;
    if json {
        return print_json(&result);
    }

    println!();
    println!("📊 Spending by Category");
    if result.categories.is_empty() {
        println!("   No spending found in this period.");
        return Ok(());
    }

    println!("   {:<15} │ {:>10} │ {:>5}", "Category", "Amount", "Count");
    println!("   ────────────────┼────────────┼───────");
    for (category, totals) in &result.categories {
        println!(
            "   {:<15} │ {:>10.2} │ {:>5}",
            category.as_str(),
            totals.total,
            totals.count
        );
    }
    println!("   ────────────────┴────────────┴───────");
    println!("   Total: ${:.2}", result.total_spending);
    Ok(())
}

pub fn cmd_income(
    accessor: &Accessor,
    user: &str,
    from: Option<String>,
    to: Option<String>,
    json: bool,
) -> Result<()> {
    let result = tools::get_income_summary(
        accessor,
        user,
        IncomeSummaryParams {
            start_date: from,
            end_date: to,
        },
    )?;
    if json {
        return print_json(&result);
    }

    println!();
    println!("💵 Income: ${:.2} across {} transactions", result.total, result.count);
    for t in &result.transactions {
        print_transaction_line(t);
    }
    Ok(())
}

pub fn cmd_search(
    accessor: &Accessor,
    user: &str,
    params: SearchTransactionsParams,
    json: bool,
) -> Result<()> {
    let result = tools::search_transactions(accessor, user, params)?;
    if json {
        return print_json(&result);
    }

    println!();
    println!(
        "🔎 {} of {} matching transactions (${:.2} total)",
        result.transactions.len(),
        result.total_count,
        result.total_amount
    );
    for t in &result.transactions {
        print_transaction_line(t);
    }
    Ok(())
}

pub fn cmd_category(accessor: &Accessor, user: &str, category: &str, json: bool) -> Result<()> {
    let result = tools::get_category_spending(
        accessor,
        user,
        CategorySpendingParams {
            category: category.to_string(),
        },
    )?;
    if json {
        return print_json(&result);
    }

    println!();
    println!(
        "📂 {}: ${:.2} across {} transactions",
        category, result.total, result.count
    );
    for t in &result.transactions {
        print_transaction_line(t);
    }
    Ok(())
}

pub fn cmd_recent(accessor: &Accessor, user: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let result = tools::get_recent_transactions(
        accessor,
        user,
        RecentTransactionsParams { limit },
    )?;
    if json {
        return print_json(&result);
    }

    println!();
    println!("🕐 Recent transactions");
    for t in &result.transactions {
        print_transaction_line(t);
    }
    Ok(())
}

/// Link the sandbox provider on first run, refresh the cache afterwards
pub async fn cmd_sync(accessor: &Accessor, user: &str, json: bool) -> Result<()> {
    let provider = MockProvider::new();

    let report = if accessor.store().connection(user)?.is_some() {
        sync_user(accessor, &provider, user)
            .await
            .context("Sync failed; previously cached data is untouched")?
    } else {
        let link_token = provider.link_token(user).await?;
        // The real link flow happens in a browser; the sandbox skips straight
        // to a public token
        link_user(accessor, &provider, user, &format!("public-{}", link_token))
            .await
            .context("Link failed")?
    };

    if json {
        return print_json(&report);
    }

    println!();
    println!(
        "✅ Synced {} accounts and {} transactions",
        report.accounts, report.transactions
    );
    Ok(())
}

pub fn cmd_tools() -> Result<()> {
    print_json(&tools::tool_definitions())
}
