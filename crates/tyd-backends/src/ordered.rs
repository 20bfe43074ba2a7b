//! Ordered-index adapter: rank-of-key and range-by-rank over the sorted
//! term collection.
//!
//! The native primitives here mirror a sorted-set store: `rank` finds the
//! 0-based insertion position of the query (lower bound), `range` returns
//! the contiguous run of entries from that position. Rank 0 is a valid
//! match position; only "no element ranks at or after the query" produces
//! an empty window.

use async_trait::async_trait;
use tyd_core::error::BackendError;
use tyd_core::{TermBackend, Vocabulary};

/// Immutable sorted collection of sentinel-terminated terms.
#[derive(Debug, Clone)]
pub struct OrderedIndex {
    entries: Vec<String>,
}

impl OrderedIndex {
    /// Build the index from a loaded vocabulary. The vocabulary is already
    /// sorted and deduplicated; the entries are taken as-is.
    pub fn new(vocab: &Vocabulary) -> Self {
        Self {
            entries: vocab.entries().to_vec(),
        }
    }

    /// 0-based position the query would occupy: the index of the first
    /// entry `>= query`. Equals `len()` when the query sorts after
    /// everything.
    fn rank(&self, query: &str) -> usize {
        self.entries.partition_point(|entry| entry.as_str() < query)
    }

    /// Entries at positions `[start, start + limit)`, upper bound clamped
    /// to the collection length. Out-of-range starts yield an empty slice,
    /// never an error.
    fn range(&self, start: usize, limit: usize) -> &[String] {
        let start = start.min(self.entries.len());
        let end = start.saturating_add(limit).min(self.entries.len());
        &self.entries[start..end]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl TermBackend for OrderedIndex {
    fn name(&self) -> &'static str {
        "ordered-index"
    }

    async fn scan_from(&self, query: &str, limit: usize) -> Result<Vec<String>, BackendError> {
        let rank = self.rank(query);
        tracing::trace!(query, rank, limit, "ordered scan");
        Ok(self.range(rank, limit).to_vec())
    }
}
