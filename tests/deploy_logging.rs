//! Diagnostic output of the deployment orchestrator.
//!
//! Installs a process-wide logger, so this file holds a single test.

mod common;

use std::sync::Mutex;

use common::{Journal, MockClient, MockEnsurer, contract, hash};
use kodegen_deployer::deploy::{Unbounded, ensure_contracts_deployed};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl CaptureLogger {
    fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.lines.lock().unwrap())
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if record.target().starts_with("kodegen_deployer") {
            self.lines
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[tokio::test]
async fn waiting_message_is_emitted_once_and_only_when_there_is_work() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let journal = Journal::default();
    let client = MockClient::new(journal.clone());
    let idle = MockEnsurer::new(journal.clone());

    ensure_contracts_deployed(&client, &idle, &[], &Unbounded)
        .await
        .unwrap();
    ensure_contracts_deployed(&client, &idle, &[contract("a"), contract("b")], &Unbounded)
        .await
        .unwrap();
    assert!(LOGGER.take().is_empty());

    let busy = MockEnsurer::new(journal.clone())
        .deploys("a", vec![hash(1), hash(2)], 0)
        .deploys("b", vec![hash(3)], 0);
    ensure_contracts_deployed(&client, &busy, &[contract("a"), contract("b")], &Unbounded)
        .await
        .unwrap();

    assert_eq!(
        LOGGER.take(),
        [(Level::Debug, "waiting for contracts".to_string())]
    );
}
