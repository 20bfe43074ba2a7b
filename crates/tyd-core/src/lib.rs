//! tyd-core — type-ahead daemon core library.
//!
//! This crate holds everything the transport layer does not need to know
//! about: the lookup engine, the backend contract it drives, the error
//! taxonomy, vocabulary bulk loading, and configuration.
//!
//! # Architecture
//!
//! ```text
//! Vocabulary ──► Backend (ordered index | prefix scan) ──► LookupEngine ──► transport
//! ```
//!
//! The vocabulary is loaded once at startup and handed to a backend as an
//! immutable collection; every lookup after that is a read-only scan. The
//! engine owns query normalization, the per-call deadline, and the shared
//! scan-and-unmark pass, so each backend adapter only has to answer one
//! question: "give me up to N index entries, sorted, starting at the lower
//! bound of this query".

pub mod backend;
pub mod config;
pub mod engine;
pub mod error;
pub mod vocab;

pub use backend::TermBackend;
pub use engine::{EngineConfig, Lookup, LookupEngine};
pub use error::{BackendError, ErrorKind, LookupError};
pub use vocab::{Vocabulary, SENTINEL};
