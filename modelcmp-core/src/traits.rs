//! Trait definitions shared across the modelcmp crates.

/// Compact `key=value` rendering used as a single `tracing` field.
///
/// Implementors keep the text on one line so log processors can split it
/// on whitespace.
pub trait LogSummary {
    fn log_summary(&self) -> String;
}
