//! Error types for the relset crates.

use thiserror::Error;

/// Top-level error type for dataset construction.
#[derive(Debug, Error)]
pub enum RelsetError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Train id {train_id} outside 1..={max}")]
    TrainOutOfRange { train_id: u8, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RelsetError {
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
