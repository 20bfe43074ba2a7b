//! Test builders — ergonomic constructors for vocabularies and engines.
//!
//! These are for readability in test assertions, not for production use.
//! They panic on invalid input rather than returning `Result`.

use std::time::Duration;
use tyd_backends::{OrderedIndex, PrefixStore};
use tyd_core::{EngineConfig, LookupEngine, Vocabulary};

/// Build a vocabulary from raw term strings.
pub fn vocab<S: AsRef<str>>(terms: &[S]) -> Vocabulary {
    Vocabulary::from_terms(terms.iter().map(|s| s.as_ref()))
}

/// Engine over the ordered-index backend with default window/timeout.
pub fn ordered_engine<S: AsRef<str>>(terms: &[S]) -> LookupEngine<OrderedIndex> {
    LookupEngine::with_defaults(OrderedIndex::new(&vocab(terms)))
}

/// Engine over the prefix-scan backend with default window/timeout.
pub fn prefix_engine<S: AsRef<str>>(terms: &[S]) -> LookupEngine<PrefixStore> {
    LookupEngine::with_defaults(PrefixStore::new(&vocab(terms)).expect("fst build"))
}

/// Ordered-index engine with an explicit scan window.
pub fn ordered_engine_with_window<S: AsRef<str>>(
    terms: &[S],
    window: usize,
) -> LookupEngine<OrderedIndex> {
    LookupEngine::new(
        OrderedIndex::new(&vocab(terms)),
        EngineConfig {
            window,
            timeout: Duration::from_secs(1),
        },
    )
}

/// Prefix-scan engine with an explicit scan window.
pub fn prefix_engine_with_window<S: AsRef<str>>(
    terms: &[S],
    window: usize,
) -> LookupEngine<PrefixStore> {
    LookupEngine::new(
        PrefixStore::new(&vocab(terms)).expect("fst build"),
        EngineConfig {
            window,
            timeout: Duration::from_secs(1),
        },
    )
}
