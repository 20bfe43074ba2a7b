//! Prefix-scan adapter: key enumeration by prefix over an [`fst::Set`].
//!
//! The store's native listing operation is "stream keys accepted by an
//! automaton, in lexicographic order". The adapter passes the query
//! through as a `starts_with` automaton and the bound through as a stream
//! cutoff; it does not re-check the prefix boundary — that stays with the
//! engine, which must not assume the store enforces it.

use async_trait::async_trait;
use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use tyd_core::error::BackendError;
use tyd_core::{TermBackend, Vocabulary};

/// FST-backed term store, addressable by key prefix.
pub struct PrefixStore {
    set: Set<Vec<u8>>,
}

impl PrefixStore {
    /// Build the store from a loaded vocabulary. The vocabulary's sorted
    /// order is exactly the insertion order the FST builder requires.
    pub fn new(vocab: &Vocabulary) -> anyhow::Result<Self> {
        let set = Set::from_iter(vocab.entries())
            .map_err(|e| anyhow::anyhow!("building fst term store: {e}"))?;
        Ok(Self { set })
    }

    /// Number of keys in the store.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl std::fmt::Debug for PrefixStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixStore")
            .field("keys", &self.set.len())
            .finish()
    }
}

#[async_trait]
impl TermBackend for PrefixStore {
    fn name(&self) -> &'static str {
        "prefix-scan"
    }

    async fn scan_from(&self, query: &str, limit: usize) -> Result<Vec<String>, BackendError> {
        let automaton = Str::new(query).starts_with();
        let mut stream = self.set.search(automaton).into_stream();

        let mut keys = Vec::new();
        while keys.len() < limit {
            match stream.next() {
                Some(key) => {
                    let entry =
                        String::from_utf8(key.to_vec()).map_err(|e| BackendError::Unavailable {
                            message: format!("non-utf8 key in term store: {e}"),
                        })?;
                    keys.push(entry);
                }
                None => break,
            }
        }
        Ok(keys)
    }
}
