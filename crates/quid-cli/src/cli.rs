//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quid",
    about = "Chat-ready queries over personal bank-transaction data",
    version
)]
pub struct Cli {
    /// JSON store file; without it, queries run in-memory against the
    /// canned demo dataset
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// User identifier scoping every query
    #[arg(long, global = true, default_value = "demo")]
    pub user: String,

    /// Print the raw tool result as JSON instead of the human rendering
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show checking total, credit owed, and net worth
    Balance,

    /// List accounts with balances
    Accounts,

    /// Spending broken down by category
    Spending {
        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Income summary
    Income {
        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Search transactions by any combination of criteria
    Search {
        /// Category name (groceries, food, transport, ...)
        #[arg(long)]
        category: Option<String>,
        /// Merchant substring, case-insensitive
        #[arg(long)]
        merchant: Option<String>,
        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Minimum signed amount
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        /// Maximum signed amount
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
        /// Account name substring, case-insensitive
        #[arg(long)]
        account: Option<String>,
        /// Maximum results (default 10)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Spend drill-down for a single category
    Category {
        /// Category name
        category: String,
    },

    /// Most recent transactions across all accounts
    Recent {
        /// Maximum results (default 10)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Link the sandbox provider and cache its data for the user
    Sync,

    /// Print the agent tool definitions as JSON
    Tools,
}
