//! Error taxonomy for lookups.
//!
//! Two kinds of failure exist from the caller's point of view: the query
//! was unusable before any backend work happened ([`ErrorKind::InvalidInput`]),
//! or the backend misbehaved mid-request ([`ErrorKind::TransientBackend`]).
//! An empty result set is neither — it is a successful lookup.

use std::time::Duration;
use thiserror::Error;

/// Faults raised by a backend adapter.
///
/// The engine never looks past these variants into backend internals; they
/// exist so the transport can distinguish "retry later" from "fix your
/// request".
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend call did not complete within its deadline.
    #[error("timed out after {elapsed:?}")]
    Timeout { elapsed: Duration },

    /// Connection failure or a store-level fault.
    #[error("backend unavailable: {message}")]
    Unavailable { message: String },

    /// The store refused the request under load.
    #[error("throttled: {message}")]
    Throttled { message: String },
}

/// Errors surfaced by [`LookupEngine::lookup`](crate::LookupEngine::lookup).
#[derive(Debug, Error)]
pub enum LookupError {
    /// The query was empty (or whitespace-only) after trimming. Raised
    /// before any backend call is made.
    #[error("empty query")]
    EmptyQuery,

    /// A backend call failed. Carries which backend and which operation so
    /// the boundary can log something actionable.
    #[error("{backend} {op} failed: {source}")]
    Backend {
        backend: &'static str,
        op: &'static str,
        #[source]
        source: BackendError,
    },
}

/// Coarse classification used by the transport layer for status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client error; not retried.
    InvalidInput,
    /// Server error; the caller may retry, the engine does not.
    TransientBackend,
}

impl LookupError {
    /// Classify this error for the boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::EmptyQuery => ErrorKind::InvalidInput,
            LookupError::Backend { .. } => ErrorKind::TransientBackend,
        }
    }

    /// True when the underlying fault was a deadline expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            LookupError::Backend {
                source: BackendError::Timeout { .. },
                ..
            }
        )
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, LookupError>;
