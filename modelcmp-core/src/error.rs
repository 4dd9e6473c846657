//! Structured error types for the modelcmp crates.

use thiserror::Error;

/// Unified error type for all modelcmp operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelCmpError {
    /// Invalid input (length mismatch, non-binary label, bad shape)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Parse error (malformed JSON or unknown identifier at a boundary)
    #[error("parse error: {0}")]
    Parse(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl ModelCmpError {
    /// Stable snake_case tag for the variant, used by the JSON boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelCmpError::InvalidInput(_) => "invalid_input",
            ModelCmpError::Parse(_) => "parse",
            ModelCmpError::Other(_) => "other",
        }
    }
}

/// Convenience alias used throughout the modelcmp crates.
pub type Result<T> = std::result::Result<T, ModelCmpError>;

/// Fail with [`ModelCmpError::InvalidInput`] unless two parallel slices have
/// the same length.
///
/// `what` names the pair in the message, e.g. `"predicted/actual"`.
pub fn ensure_same_len(what: &str, left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(ModelCmpError::InvalidInput(format!(
            "{what} length mismatch: {left} != {right}"
        )));
    }
    Ok(())
}
