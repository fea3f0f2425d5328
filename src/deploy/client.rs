//! Chain client seam and transaction receipts.

use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Execution outcome of an included transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    /// Execution succeeded.
    Success,
    /// Execution reverted; the transaction is still included.
    Reverted,
}

/// Receipt for an included transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Hash of the transaction.
    pub transaction_hash: TxHash,

    /// Block the transaction was included in.
    #[serde(default)]
    pub block_number: Option<u64>,

    /// Execution outcome.
    pub status: ReceiptStatus,

    /// Address of the created contract, for creation transactions.
    #[serde(default)]
    pub contract_address: Option<Address>,

    /// Gas consumed by the transaction.
    #[serde(default)]
    pub gas_used: u64,
}

impl TransactionReceipt {
    /// Creates a successful receipt.
    pub fn success(transaction_hash: TxHash) -> Self {
        Self::with_status(transaction_hash, ReceiptStatus::Success)
    }

    /// Creates a reverted receipt.
    pub fn reverted(transaction_hash: TxHash) -> Self {
        Self::with_status(transaction_hash, ReceiptStatus::Reverted)
    }

    fn with_status(transaction_hash: TxHash, status: ReceiptStatus) -> Self {
        Self {
            transaction_hash,
            block_number: None,
            status,
            contract_address: None,
            gas_used: 0,
        }
    }

    /// Sets the inclusion block.
    pub fn with_block_number(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }

    /// Returns true if execution succeeded.
    pub fn is_success(&self) -> bool {
        self.status == ReceiptStatus::Success
    }
}

/// Connection to the chain the contracts are deployed on.
///
/// Implementations own transport, retries, and polling cadence. The
/// orchestrator only asks for one receipt at a time.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Error produced by this client and by ensure operations that use it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves once `hash` is included, returning its receipt.
    ///
    /// A reverted transaction is not an error here; it is reported through
    /// [`TransactionReceipt::status`].
    async fn wait_for_transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<TransactionReceipt, Self::Error>;
}
