//! Scripted collaborators shared by the deployment tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kodegen_deployer::deploy::{ChainClient, Contract, EnsureContract, TransactionReceipt, TxHash};
use thiserror::Error;

/// Error type produced by the scripted collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rpc error: {0}")]
pub struct RpcError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    EnsureStart(String),
    EnsureEnd(String),
    WaitStart(TxHash),
    WaitEnd(TxHash),
}

/// Ordered record of collaborator calls.
#[derive(Debug, Default, Clone)]
pub struct Journal {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Journal {
    pub fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn wait_events(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, Event::WaitStart(_) | Event::WaitEnd(_)))
            .collect()
    }

    pub fn waited(&self) -> Vec<TxHash> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::WaitStart(hash) => Some(hash),
                _ => None,
            })
            .collect()
    }

    pub fn ensure_started(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::EnsureStart(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    pub fn ensure_finished(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::EnsureEnd(label) => Some(label),
                _ => None,
            })
            .collect()
    }
}

/// Tracks how many calls overlap.
#[derive(Debug, Default)]
pub struct InFlight {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl InFlight {
    fn enter(&self) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

async fn yield_times(n: usize) {
    for _ in 0..n {
        tokio::task::yield_now().await;
    }
}

/// Chain client answering receipts from a script.
#[derive(Debug, Default)]
pub struct MockClient {
    journal: Journal,
    reverted: HashSet<TxHash>,
    failing: HashSet<TxHash>,
    pub waits: InFlight,
}

impl MockClient {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            ..Self::default()
        }
    }

    pub fn reverting(mut self, hash: TxHash) -> Self {
        self.reverted.insert(hash);
        self
    }

    pub fn failing(mut self, hash: TxHash) -> Self {
        self.failing.insert(hash);
        self
    }
}

#[async_trait]
impl ChainClient for MockClient {
    type Error = RpcError;

    async fn wait_for_transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<TransactionReceipt, Self::Error> {
        self.journal.record(Event::WaitStart(hash));
        self.waits.enter();
        yield_times(3).await;
        self.waits.exit();
        self.journal.record(Event::WaitEnd(hash));

        if self.failing.contains(&hash) {
            return Err(RpcError(format!("receipt unavailable for {hash}")));
        }

        let receipt = if self.reverted.contains(&hash) {
            TransactionReceipt::reverted(hash)
        } else {
            TransactionReceipt::success(hash)
        };
        Ok(receipt.with_block_number(7))
    }
}

#[derive(Debug, Clone)]
struct Step {
    result: Result<Vec<TxHash>, RpcError>,
    yields: usize,
}

/// Ensure operation answering per contract label from a script.
///
/// Unscripted contracts count as already deployed.
#[derive(Debug, Default)]
pub struct MockEnsurer {
    journal: Journal,
    steps: HashMap<String, Step>,
    pub calls: InFlight,
}

impl MockEnsurer {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            ..Self::default()
        }
    }

    /// `label` submits `txs` after yielding `yields` times.
    pub fn deploys(mut self, label: &str, txs: Vec<TxHash>, yields: usize) -> Self {
        self.steps.insert(
            label.to_string(),
            Step {
                result: Ok(txs),
                yields,
            },
        );
        self
    }

    /// `label` fails with `message` after yielding `yields` times.
    pub fn fails(mut self, label: &str, message: &str, yields: usize) -> Self {
        self.steps.insert(
            label.to_string(),
            Step {
                result: Err(RpcError(message.to_string())),
                yields,
            },
        );
        self
    }
}

#[async_trait]
impl EnsureContract<MockClient> for MockEnsurer {
    async fn ensure_contract(
        &self,
        _client: &MockClient,
        contract: &Contract,
    ) -> Result<Vec<TxHash>, RpcError> {
        let label = contract.label().to_string();
        let step = self.steps.get(&label).cloned().unwrap_or(Step {
            result: Ok(Vec::new()),
            yields: 0,
        });

        self.journal.record(Event::EnsureStart(label.clone()));
        self.calls.enter();
        yield_times(step.yields).await;
        self.calls.exit();
        self.journal.record(Event::EnsureEnd(label));

        step.result
    }
}

pub fn contract(label: &str) -> Contract {
    Contract::new(vec![0x60, 0x80, 0x60, 0x40], 4).with_debug_label(label)
}

pub fn hash(byte: u8) -> TxHash {
    TxHash::repeat_byte(byte)
}
