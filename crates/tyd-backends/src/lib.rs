//! tyd-backends — backend adapters for the lookup engine.
//!
//! Two realizations of [`tyd_core::TermBackend`], built from the same
//! [`tyd_core::Vocabulary`] and interchangeable at query time:
//!
//! - [`OrderedIndex`]: rank-of-key plus range-by-rank over a globally
//!   sorted in-memory collection.
//! - [`PrefixStore`]: key enumeration by prefix automaton over an
//!   [`fst::Set`].
//!
//! Each adapter is a thin translation layer; the scan/filter/unmark logic
//! lives in the engine, once.

pub mod ordered;
pub mod prefix;

pub use ordered::OrderedIndex;
pub use prefix::PrefixStore;
