//! Main deployment orchestration.
//!
//! This module provides the [`Deployer`] orchestrator and the
//! [`ensure_contracts_deployed`] shorthand.

use alloy_primitives::TxHash;
use futures_util::future::try_join_all;

use super::{
    ChainClient, ConcurrencyGate, Contract, DeployError, EnsureContract, ReceiptStatus,
};

/// What to do when an awaited transaction was included but reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevertPolicy {
    /// Stop and return [`DeployError::TransactionReverted`].
    #[default]
    Fail,
    /// Log a warning and treat the transaction as deployed.
    Ignore,
}

/// Deployment orchestrator.
///
/// Holds the chain client, the ensure operation, and the gate that bounds
/// how many ensure operations run at once.
///
/// # Ordering
///
/// - Ensure operations run concurrently, bounded by the gate
/// - Returned hashes follow contract order, not completion order
/// - Receipts are awaited one at a time in that same order
///
/// # Failure
///
/// The first failing ensure operation fails the whole call. Operations
/// still in flight are dropped and no receipt is awaited.
#[derive(Debug)]
pub struct Deployer<C, E, G> {
    client: C,
    ensurer: E,
    gate: G,
    revert_policy: RevertPolicy,
}

impl<C, E, G> Deployer<C, E, G>
where
    C: ChainClient,
    E: EnsureContract<C>,
    G: ConcurrencyGate,
{
    /// Creates a deployer with [`RevertPolicy::Fail`].
    pub fn new(client: C, ensurer: E, gate: G) -> Self {
        Self {
            client,
            ensurer,
            gate,
            revert_policy: RevertPolicy::default(),
        }
    }

    /// Sets the revert policy.
    pub fn with_revert_policy(mut self, policy: RevertPolicy) -> Self {
        self.revert_policy = policy;
        self
    }

    /// Returns the chain client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the concurrency gate.
    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// Returns the revert policy.
    pub fn revert_policy(&self) -> RevertPolicy {
        self.revert_policy
    }

    /// Ensures every contract is deployed and waits for the resulting transactions.
    ///
    /// # Returns
    ///
    /// Hashes of all transactions the ensure operations submitted, in
    /// contract order. Empty when every contract was already deployed.
    ///
    /// # Errors
    ///
    /// - [`DeployError::Client`] with the collaborator's error, unchanged
    /// - [`DeployError::TransactionReverted`] under [`RevertPolicy::Fail`]
    pub async fn ensure_contracts_deployed(
        &self,
        contracts: &[Contract],
    ) -> Result<Vec<TxHash>, DeployError<C::Error>> {
        ensure_all(
            &self.client,
            &self.ensurer,
            &self.gate,
            contracts,
            self.revert_policy,
        )
        .await
    }
}

/// Ensures every contract is deployed using the default [`RevertPolicy`].
///
/// Shorthand for [`Deployer::ensure_contracts_deployed`] over borrowed
/// collaborators.
pub async fn ensure_contracts_deployed<C, E, G>(
    client: &C,
    ensurer: &E,
    contracts: &[Contract],
    gate: &G,
) -> Result<Vec<TxHash>, DeployError<C::Error>>
where
    C: ChainClient,
    E: EnsureContract<C>,
    G: ConcurrencyGate,
{
    ensure_all(client, ensurer, gate, contracts, RevertPolicy::default()).await
}

async fn ensure_all<C, E, G>(
    client: &C,
    ensurer: &E,
    gate: &G,
    contracts: &[Contract],
    policy: RevertPolicy,
) -> Result<Vec<TxHash>, DeployError<C::Error>>
where
    C: ChainClient,
    E: EnsureContract<C>,
    G: ConcurrencyGate,
{
    let batches = try_join_all(
        contracts
            .iter()
            .map(|contract| gate.run(ensurer.ensure_contract(client, contract))),
    )
    .await
    .map_err(DeployError::Client)?;

    let txs: Vec<TxHash> = batches.into_iter().flatten().collect();

    if !txs.is_empty() {
        log::debug!("waiting for contracts");
        // One receipt at a time: parallel polling makes RPC nodes reject requests.
        for &hash in &txs {
            let receipt = client
                .wait_for_transaction_receipt(hash)
                .await
                .map_err(DeployError::Client)?;

            if receipt.status == ReceiptStatus::Reverted {
                match policy {
                    RevertPolicy::Fail => {
                        return Err(DeployError::TransactionReverted {
                            hash,
                            block_number: receipt.block_number,
                        });
                    }
                    RevertPolicy::Ignore => {
                        log::warn!("transaction {hash} reverted; continuing");
                    }
                }
            }
        }
    }

    Ok(txs)
}
