//! Shared test utilities for tyd integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top
//! of each harness file. Helpers are deterministic; the mock backends in
//! [`backends`] work with `tokio::time::pause()` where noted.

pub mod assertions;
pub mod backends;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use backends::*;
pub use builders::*;
pub use fixtures::*;
