//! Quid CLI - chat-ready queries over personal bank-transaction data
//!
//! Usage:
//!   quid balance                    Checking, credit owed, net worth
//!   quid spending --from 2026-01-01 Spending by category
//!   quid search --category food     Filtered transaction search
//!   quid sync --store quid.json     Pull sandbox data into a store file

mod cli;
mod commands;


use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quid_core::accessor::Accessor;
use quid_core::store::{JsonStore, MemoryStore, Store};
use quid_core::tools::SearchTransactionsParams;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let store: Arc<dyn Store> = match &cli.store {
        Some(path) => Arc::new(
            JsonStore::open(path)
                .with_context(|| format!("Failed to open store {}", path.display()))?,
        ),
        None => Arc::new(MemoryStore::new()),
    };
    let accessor = Accessor::new(store);

    match cli.command {
        Commands::Balance => commands::cmd_balance(&accessor, &cli.user, cli.json),
        Commands::Accounts => commands::cmd_accounts(&accessor, &cli.user, cli.json),
        Commands::Spending { from, to } => {
            commands::cmd_spending(&accessor, &cli.user, from, to, cli.json)
        }
        Commands::Income { from, to } => {
            commands::cmd_income(&accessor, &cli.user, from, to, cli.json)
        }
        Commands::Search {
            category,
            merchant,
            from,
            to,
            min,
            max,
            account,
            limit,
        } => commands::cmd_search(
            &accessor,
            &cli.user,
            SearchTransactionsParams {
                category,
                merchant,
                start_date: from,
                end_date: to,
                min_amount: min,
                max_amount: max,
                account,
                limit,
            },
            cli.json,
        ),
        Commands::Category { category } => {
            commands::cmd_category(&accessor, &cli.user, &category, cli.json)
        }
        Commands::Recent { limit } => commands::cmd_recent(&accessor, &cli.user, limit, cli.json),
        Commands::Sync => commands::cmd_sync(&accessor, &cli.user, cli.json).await,
        Commands::Tools => commands::cmd_tools(),
    }
}
