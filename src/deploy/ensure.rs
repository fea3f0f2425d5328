//! Per-contract ensure operation seam.

use alloy_primitives::TxHash;
use async_trait::async_trait;

use super::{ChainClient, Contract};

/// Idempotent check-and-deploy for a single contract.
///
/// Returns the hashes of the transactions it submitted, which is empty when
/// the contract was already deployed. Implementations must not wait for
/// inclusion; the orchestrator does that afterwards.
#[async_trait]
pub trait EnsureContract<C: ChainClient>: Send + Sync {
    /// Ensures `contract` is deployed using `client`.
    async fn ensure_contract(
        &self,
        client: &C,
        contract: &Contract,
    ) -> Result<Vec<TxHash>, C::Error>;
}
