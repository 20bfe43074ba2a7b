//! Backend contract consumed by the lookup engine.
//!
//! Two adapters implement this in `tyd-backends`: one over a rank/range
//! ordered index, one over an FST prefix scan. Both answer the same
//! primitive so the engine logic is written exactly once.

use crate::error::BackendError;
use async_trait::async_trait;

/// A replaceable ordered-term store.
///
/// Implementations must return entries in byte-lexicographic order,
/// starting at the lower bound of `query` (the first stored entry
/// `>= query`), and at most `limit` of them. Returning entries that do not
/// share the query prefix is allowed — the engine enforces the prefix
/// boundary itself and stops at the first non-matching entry.
#[async_trait]
pub trait TermBackend: std::fmt::Debug + Send + Sync {
    /// Short stable name used in error and log context.
    fn name(&self) -> &'static str;

    /// Fetch up to `limit` raw index entries (sentinel still attached)
    /// from the lower bound of `query` onwards.
    ///
    /// An empty vector means nothing ranks at or after the query; that is
    /// a valid "no match" answer, not an error.
    async fn scan_from(&self, query: &str, limit: usize) -> Result<Vec<String>, BackendError>;
}
