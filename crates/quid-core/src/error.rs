//! Error types for Quid

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bank provider error: {0}")]
    Provider(String),

    #[error("No bank connection for user: {0}")]
    NotLinked(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
