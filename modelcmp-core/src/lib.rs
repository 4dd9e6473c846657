//! Shared primitives for the modelcmp crates.
//!
//! `modelcmp-core` provides the foundation the other crates build on:
//!
//! - **Error types** — [`ModelCmpError`] and [`Result`] for structured error handling
//! - **Traits** — [`LogSummary`] for one-line log fields

pub mod error;
pub mod traits;

pub use error::{ensure_same_len, ModelCmpError, Result};
pub use traits::*;
