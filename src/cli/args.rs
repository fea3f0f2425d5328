//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation of
//! values clap cannot check on its own.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Contract deployment and bundle configuration tooling
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_deployer",
    version,
    about = "Contract deployment and bundle configuration tooling",
    long_about = "Inspects and prepares bundle configurations.

The config is a standalone TOML file or the [package.metadata.bundle] table of a Cargo.toml.

Usage:
  kodegen_deployer bundle show --config bundle.toml
  kodegen_deployer bundle plan --config packages/world-modules/Cargo.toml
  kodegen_deployer bundle prepare

Set RUST_LOG=debug for diagnostic output."
)]
pub struct Args {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle configuration commands
    #[command(subcommand)]
    Bundle(BundleCommand),
}

/// Bundle configuration commands
#[derive(Subcommand, Debug)]
pub enum BundleCommand {
    /// Print the resolved config as JSON
    Show(ConfigArgs),

    /// List the artifact paths the config asks for
    Plan(ConfigArgs),

    /// Create the output directory, cleaning it first if the config says so
    Prepare(ConfigArgs),
}

/// Location of the bundle config
#[derive(clap::Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Bundle config file (standalone TOML or Cargo.toml)
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "bundle.toml",
        env = "KODEGEN_BUNDLE_CONFIG"
    )]
    pub config: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Bundle(
                BundleCommand::Show(args) | BundleCommand::Plan(args) | BundleCommand::Prepare(args),
            ) => {
                if !args.config.is_file() {
                    return Err(format!("Config file not found: {}", args.config.display()));
                }
            }
        }

        Ok(())
    }
}
