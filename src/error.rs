//! Top-level error types for the deployer binary and library surface.

use thiserror::Error;

/// Result type alias for top-level operations
pub type Result<T> = std::result::Result<T, DeployerError>;

/// Main error type for CLI-driven operations
#[derive(Error, Debug)]
pub enum DeployerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bundle configuration errors
    #[error("Bundle error: {0}")]
    Bundle(#[from] crate::bundle::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
