//! Mock backends for failure-path and scan-behaviour tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tyd_core::error::BackendError;
use tyd_core::TermBackend;

/// Serves a fixed, pre-scripted window regardless of the query. Lets a
/// test place entries the engine must refuse to emit (early-exit checks).
#[derive(Debug)]
pub struct ScriptedBackend {
    pub window: Vec<String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    pub fn new<S: AsRef<str>>(window: &[S]) -> Self {
        Self {
            window: window.iter().map(|s| s.as_ref().to_string()).collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle for asserting how many scans were issued.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TermBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn scan_from(&self, _query: &str, limit: usize) -> Result<Vec<String>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.window.iter().take(limit).cloned().collect())
    }
}

/// Fails every scan with the given fault.
#[derive(Debug)]
pub enum FailingBackend {
    Unavailable,
    Throttled,
}

#[async_trait]
impl TermBackend for FailingBackend {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn scan_from(&self, _query: &str, _limit: usize) -> Result<Vec<String>, BackendError> {
        match self {
            FailingBackend::Unavailable => Err(BackendError::Unavailable {
                message: "connection refused".to_string(),
            }),
            FailingBackend::Throttled => Err(BackendError::Throttled {
                message: "too many requests".to_string(),
            }),
        }
    }
}

/// Answers correctly, but only after `delay`. Combine with a short engine
/// timeout (and `tokio::time::pause()` for determinism) to exercise the
/// deadline path.
#[derive(Debug)]
pub struct SlowBackend {
    pub delay: Duration,
    pub window: Vec<String>,
}

impl SlowBackend {
    pub fn new(delay: Duration, window: &[&str]) -> Self {
        Self {
            delay,
            window: window.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl TermBackend for SlowBackend {
    fn name(&self) -> &'static str {
        "slow"
    }

    async fn scan_from(&self, _query: &str, limit: usize) -> Result<Vec<String>, BackendError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.window.iter().take(limit).cloned().collect())
    }
}
