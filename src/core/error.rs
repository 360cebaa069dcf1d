//! Error types for the brush engine

use thiserror::Error;

/// Main error type for brush construction and block table loading
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown block \"{0}\"")]
    UnknownBlock(String),

    #[error("frequency must be an integer between 1 and 10,000 (got \"{0}\")")]
    Frequency(String),

    #[error("unknown brush \"{0}\"")]
    UnknownBrush(String),

    #[error("unsupported block table version {0}")]
    TableVersion(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("block table error: {0}")]
    Json(#[from] serde_json::Error),
}
