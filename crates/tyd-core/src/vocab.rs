//! Vocabulary bulk load.
//!
//! Terms arrive as free-form text (typically one per line in a file) and
//! leave as the canonical index form: trimmed, uppercased, suffixed with
//! the sentinel, globally sorted, deduplicated. Both backend adapters are
//! built from the same [`Vocabulary`], which is what makes them
//! interchangeable at query time.

use std::io::{self, BufRead};
use std::path::Path;

/// Trailing marker on every complete stored term.
///
/// Distinguishes "AB" the vocabulary entry from "AB" occurring only as a
/// prefix of a longer entry. The sentinel must not appear in any real
/// term; input lines containing it are skipped at load.
pub const SENTINEL: char = '*';

/// An immutable, sorted, sentinel-suffixed term collection.
///
/// Built once at startup; backends borrow or copy the entries and never
/// mutate them afterwards. Refreshing the vocabulary means building a new
/// `Vocabulary` and swapping the whole backend handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    /// Normalize and index an iterator of raw terms.
    ///
    /// Blank terms are dropped; terms containing the sentinel are logged
    /// and skipped. Duplicates (after case folding) collapse to a single
    /// entry.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = terms
            .into_iter()
            .filter_map(|term| {
                let term = term.as_ref().trim();
                if term.is_empty() {
                    return None;
                }
                if term.contains(SENTINEL) {
                    tracing::warn!(term, "skipping term containing the sentinel character");
                    return None;
                }
                let mut entry = term.to_uppercase();
                entry.push(SENTINEL);
                Some(entry)
            })
            .collect();
        entries.sort_unstable();
        entries.dedup();
        Self { entries }
    }

    /// Read a newline-separated term list.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::from_terms(lines))
    }

    /// Load a vocabulary file from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| anyhow::anyhow!("cannot open vocabulary file {}: {e}", path.display()))?;
        let vocab = Self::from_reader(io::BufReader::new(file))?;
        tracing::info!(path = %path.display(), terms = vocab.len(), "vocabulary loaded");
        Ok(vocab)
    }

    /// Sorted, sentinel-suffixed index entries.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
