//! Lookup engine — the prefix-range lookup algorithm.
//!
//! The engine is backend-agnostic: it normalizes the query, asks the
//! backend for a bounded sorted window starting at the query's lower
//! bound, and applies one scan-and-filter-and-unmark pass over that
//! window. Because the window is sorted, the first entry that does not
//! share the query prefix ends the scan — no later entry can match.

use crate::backend::TermBackend;
use crate::error::{BackendError, LookupError, Result};
use crate::vocab::SENTINEL;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Engine tuning knobs, taken from the validated startup config.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Maximum number of consecutive index entries inspected per lookup.
    pub window: usize,
    /// Deadline applied to every backend call.
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: 100,
            timeout: Duration::from_millis(1000),
        }
    }
}

/// A successful lookup: matching terms (sentinel stripped, sorted) and the
/// wall-clock time the whole operation took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub terms: Vec<String>,
    pub elapsed: Duration,
}

/// Stateless lookup front-end over a shared backend handle.
///
/// Cloning is cheap; concurrent lookups share the backend through the
/// inner [`Arc`] and never touch mutable state.
#[derive(Debug)]
pub struct LookupEngine<B> {
    backend: Arc<B>,
    config: EngineConfig,
}

impl<B> Clone for LookupEngine<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            config: self.config,
        }
    }
}

impl<B: TermBackend> LookupEngine<B> {
    pub fn new(backend: B, config: EngineConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            config,
        }
    }

    /// Engine with the default window and timeout.
    pub fn with_defaults(backend: B) -> Self {
        Self::new(backend, EngineConfig::default())
    }

    /// Look up all vocabulary terms sharing `query` as a prefix, up to the
    /// scan window, in lexicographic order.
    ///
    /// The query is trimmed and uppercased first; matching is
    /// case-insensitive. An empty result is a successful answer. Errors
    /// are either [`LookupError::EmptyQuery`] (raised before any backend
    /// call) or [`LookupError::Backend`] (deadline expiry or store fault —
    /// never a silently truncated result).
    pub async fn lookup(&self, query: &str) -> Result<Lookup> {
        let start = Instant::now();

        let query = query.trim().to_uppercase();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let scan = self.backend.scan_from(&query, self.config.window);
        let window = tokio::time::timeout(self.config.timeout, scan)
            .await
            .map_err(|_| self.wrap(BackendError::Timeout {
                elapsed: self.config.timeout,
            }))?
            .map_err(|source| self.wrap(source))?;

        let terms = collect_matches(&query, &window);
        let elapsed = start.elapsed();

        tracing::debug!(
            backend = self.backend.name(),
            %query,
            window = window.len(),
            matched = terms.len(),
            ?elapsed,
            "lookup complete"
        );

        Ok(Lookup { terms, elapsed })
    }

    fn wrap(&self, source: BackendError) -> LookupError {
        LookupError::Backend {
            backend: self.backend.name(),
            op: "scan_from",
            source,
        }
    }
}

/// Shared scan pass: walk the sorted window in order, stop at the first
/// entry that does not start with the query, and emit only
/// sentinel-terminated entries with the sentinel stripped.
fn collect_matches(query: &str, window: &[String]) -> Vec<String> {
    let mut terms = Vec::new();
    for entry in window {
        if !entry.starts_with(query) {
            // Sorted order: nothing after this entry can match either.
            break;
        }
        if let Some(term) = entry.strip_suffix(SENTINEL) {
            terms.push(term.to_string());
        }
    }
    terms
}
