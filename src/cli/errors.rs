//! CLI-specific error types
//!
//! CLI errors are fatal: they are printed to stderr and the process
//! exits non-zero.

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::record::ValidationError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Boot failed: {0}")]
    Boot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Gateway(#[from] GatewayError),
}
