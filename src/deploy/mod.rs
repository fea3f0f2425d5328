//! Contract deployment orchestration.
//!
//! This module provides [`Deployer`], which fans out an "ensure deployed"
//! operation per contract under a [`ConcurrencyGate`] and then waits for
//! every resulting transaction to be included, one at a time.
//!
//! # Overview
//!
//! The orchestrator:
//! 1. Schedules [`EnsureContract::ensure_contract`] for each [`Contract`] through the gate
//! 2. Flattens the returned transaction hashes in contract order
//! 3. Waits for each receipt serially via [`ChainClient`]
//! 4. Applies the [`RevertPolicy`] to every receipt
//! 5. Returns the flattened hashes
//!
//! # Example
//!
//! ```no_run
//! use kodegen_deployer::deploy::{
//!     ChainClient, ConcurrencyLock, Contract, Deployer, EnsureContract, RevertPolicy,
//! };
//!
//! # async fn example<C: ChainClient, E: EnsureContract<C>>(client: C, ensurer: E, contracts: Vec<Contract>) -> Result<(), Box<dyn std::error::Error>> {
//! let deployer = Deployer::new(client, ensurer, ConcurrencyLock::new(4)?)
//!     .with_revert_policy(RevertPolicy::Fail);
//!
//! let txs = deployer.ensure_contracts_deployed(&contracts).await?;
//! println!("deployed with {} transactions", txs.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`] - Chain client seam and receipts
//! - [`contract`] - Contract descriptors
//! - [`ensure`] - Per-contract ensure operation seam
//! - [`error`] - Deployment errors
//! - [`gate`] - Concurrency gates
//! - [`orchestrator`] - [`Deployer`] and [`ensure_contracts_deployed`]

pub mod client;
pub mod contract;
pub mod ensure;
pub mod error;
pub mod gate;
pub mod orchestrator;

pub use alloy_primitives::TxHash;
pub use client::{ChainClient, ReceiptStatus, TransactionReceipt};
pub use contract::Contract;
pub use ensure::EnsureContract;
pub use error::{DeployError, GateError};
pub use gate::{ConcurrencyGate, ConcurrencyLock, Unbounded};
pub use orchestrator::{Deployer, RevertPolicy, ensure_contracts_deployed};
