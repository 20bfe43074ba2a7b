//! Domain-specific assertion helpers for tyd harnesses.
//!
//! These wrap `pretty_assertions` with failure messages that name the
//! lookup invariant being violated.

use tyd_core::Lookup;

/// Assert the exact result list of a lookup.
pub fn assert_results(lookup: &Lookup, expected: &[&str]) {
    pretty_assertions::assert_eq!(
        lookup.terms,
        expected.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        "lookup results differ from expected"
    );
}

/// Assert the soundness invariants every result set must satisfy for a
/// given query: each term shares the (normalized) query as a byte prefix,
/// no term carries the sentinel, and the sequence is sorted.
pub fn assert_result_invariants(query: &str, lookup: &Lookup) {
    let query = query.trim().to_uppercase();
    for term in &lookup.terms {
        assert!(
            term.starts_with(&query),
            "result {term:?} does not share prefix {query:?}"
        );
        assert!(
            !term.contains('*'),
            "result {term:?} leaked the sentinel marker"
        );
    }
    let mut sorted = lookup.terms.clone();
    sorted.sort();
    pretty_assertions::assert_eq!(lookup.terms, sorted, "results are not in sort order");
}
