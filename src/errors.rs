use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Amount must be a positive number of yen, got {0}")]
    InvalidAmount(i64),
    #[error("Unknown transaction id: {0}")]
    UnknownTransaction(i64),
}
