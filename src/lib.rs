//! Contract deployment orchestration and bundle configuration.
//!
//! This library provides two independent pieces of release tooling:
//! - [`deploy`]: ensures a set of contracts is deployed under a concurrency
//!   gate, then waits for every resulting transaction to be included
//! - [`bundle`]: typed, declarative build options for packaging one entry
//!   module as an output artifact
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundle;
pub mod cli;
pub mod deploy;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, DeployerError, Result};
