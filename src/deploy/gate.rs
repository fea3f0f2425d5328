//! Concurrency gates.
//!
//! A gate runs a future under some bound on how many such futures may run
//! at once. The orchestrator routes every ensure operation through one.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;

use super::GateError;

/// Runs tasks under a concurrency bound.
pub trait ConcurrencyGate: Send + Sync {
    /// Runs `task` once the gate admits it and returns its output.
    fn run<F>(&self, task: F) -> impl Future<Output = F::Output> + Send
    where
        F: Future + Send,
        F::Output: Send;
}

/// Bounded gate backed by a FIFO semaphore.
///
/// Tasks are admitted in the order they first ask for a permit, so with a
/// limit of 1 they run strictly one after another in submission order.
/// Clones share the same permits.
#[derive(Debug, Clone)]
pub struct ConcurrencyLock {
    /// Private and never closed, so `acquire` cannot fail.
    semaphore: Arc<Semaphore>,
    concurrency: usize,
}

impl ConcurrencyLock {
    /// Creates a gate admitting at most `concurrency` tasks at once.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ZeroConcurrency`] if `concurrency` is 0.
    pub fn new(concurrency: usize) -> Result<Self, GateError> {
        if concurrency == 0 {
            return Err(GateError::ZeroConcurrency);
        }

        let concurrency = concurrency.min(Semaphore::MAX_PERMITS);
        Ok(Self {
            semaphore: Arc::new(Semaphore::new(concurrency)),
            concurrency,
        })
    }

    /// Returns the configured bound.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns how many tasks could start right now.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

impl ConcurrencyGate for ConcurrencyLock {
    fn run<F>(&self, task: F) -> impl Future<Output = F::Output> + Send
    where
        F: Future + Send,
        F::Output: Send,
    {
        async move {
            match self.semaphore.acquire().await {
                Ok(_permit) => task.await,
                Err(_) => unreachable!("concurrency lock semaphore was closed"),
            }
        }
    }
}

/// Gate that admits every task immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl ConcurrencyGate for Unbounded {
    fn run<F>(&self, task: F) -> impl Future<Output = F::Output> + Send
    where
        F: Future + Send,
        F::Output: Send,
    {
        task
    }
}

impl<G: ConcurrencyGate> ConcurrencyGate for Arc<G> {
    fn run<F>(&self, task: F) -> impl Future<Output = F::Output> + Send
    where
        F: Future + Send,
        F::Output: Send,
    {
        self.as_ref().run(task)
    }
}
