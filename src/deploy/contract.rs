//! Contract descriptors.

use alloy_primitives::{B256, Bytes};
use serde::{Deserialize, Serialize};

/// Label used when a contract has no debug label.
const DEFAULT_LABEL: &str = "contract";

/// One contract to ensure is deployed.
///
/// The orchestrator never looks inside a descriptor; it is handed as-is to
/// the [`EnsureContract`](super::EnsureContract) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Creation bytecode.
    pub bytecode: Bytes,

    /// Size in bytes of the runtime bytecode left on chain after creation.
    pub deployed_bytecode_size: usize,

    /// Human-readable name for logs.
    #[serde(default)]
    pub debug_label: Option<String>,

    /// Deployment salt, if the deployer uses deterministic addresses.
    #[serde(default)]
    pub salt: Option<B256>,
}

impl Contract {
    /// Creates a descriptor with no label and no salt.
    pub fn new(bytecode: impl Into<Bytes>, deployed_bytecode_size: usize) -> Self {
        Self {
            bytecode: bytecode.into(),
            deployed_bytecode_size,
            debug_label: None,
            salt: None,
        }
    }

    /// Sets the debug label.
    pub fn with_debug_label(mut self, label: impl Into<String>) -> Self {
        self.debug_label = Some(label.into());
        self
    }

    /// Sets the deployment salt.
    pub fn with_salt(mut self, salt: B256) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Returns the debug label, or `"contract"` when none is set.
    pub fn label(&self) -> &str {
        self.debug_label.as_deref().unwrap_or(DEFAULT_LABEL)
    }
}
