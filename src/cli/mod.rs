//! Command line interface for kodegen deployer.
//!
//! This module provides argument parsing, validation, and dispatch to the
//! command implementations.

mod args;
pub mod commands;

pub use args::{Args, BundleCommand, Command, ConfigArgs};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args).await
}

/// Validate and execute already-parsed arguments
pub async fn execute(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    match args.command {
        Command::Bundle(command) => commands::bundle::execute(command).await,
    }
}
