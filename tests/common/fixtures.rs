//! Static vocabularies used across harnesses.

/// The canonical four-term scenario: "AP" must yield APP, APPLE, APPLY in
/// lexicographic order; "B" yields BANANA; "Z" yields nothing.
pub const SCENARIO_TERMS: &[&str] = &["apple", "apply", "app", "banana"];

/// A broader corpus with several shared-prefix families.
pub const CORPUS_WORDS: &[&str] = &[
    "ant", "antenna", "anthem", "anthology", "antique",
    "band", "bandage", "bandit", "banjo", "bank", "banker", "banner",
    "car", "carbon", "card", "cardigan", "care", "career", "cargo",
    "date", "datum", "dawn", "day", "daybreak",
    "echo", "eclipse", "economy", "edge", "edit", "editor",
    "farm", "farmer", "fast", "fasten",
    "grape", "grapefruit", "graph", "graphite", "grasp", "grass",
];

/// `count` terms of the form `PREFIX0000 … PREFIXnnnn`, zero-padded so that
/// lexicographic order equals numeric order. Useful for window-boundary
/// tests where the matching set must exceed the scan window.
pub fn numbered_terms(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i:04}")).collect()
}
