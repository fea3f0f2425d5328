//! Deployment error types.

use alloy_primitives::TxHash;
use thiserror::Error;

/// Error returned by the deployment orchestrator.
///
/// `E` is the collaborator error type ([`ChainClient::Error`]). Collaborator
/// failures are carried as-is in [`DeployError::Client`], so `Display` and
/// `source()` are those of the original error.
///
/// [`ChainClient::Error`]: super::ChainClient::Error
#[derive(Error, Debug)]
pub enum DeployError<E>
where
    E: std::error::Error + 'static,
{
    /// A per-contract ensure operation or a receipt wait failed.
    #[error(transparent)]
    Client(E),

    /// A transaction was included but its execution reverted.
    #[error("transaction {hash} was included but reverted")]
    TransactionReverted {
        /// Hash of the reverted transaction
        hash: TxHash,
        /// Block the transaction was included in, when reported
        block_number: Option<u64>,
    },
}

impl<E> DeployError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns the collaborator error, if this is one.
    pub fn client_error(&self) -> Option<&E> {
        match self {
            Self::Client(e) => Some(e),
            Self::TransactionReverted { .. } => None,
        }
    }

    /// Returns the reverted transaction hash, if this is a revert.
    pub fn reverted_hash(&self) -> Option<TxHash> {
        match self {
            Self::TransactionReverted { hash, .. } => Some(*hash),
            Self::Client(_) => None,
        }
    }
}

/// Errors raised while constructing a concurrency gate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// A bounded gate needs at least one permit.
    #[error("concurrency limit must be at least 1")]
    ZeroConcurrency,
}
