//! CLI-specific error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {path}: {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Frame validation failed: {0}")]
    ValidationFailed(String),
}

impl CliError {
    /// Process exit code for this error
    ///
    /// Validation failures use 2 so scripts can tell them apart from
    /// operational errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ValidationFailed(_) => 2,
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
