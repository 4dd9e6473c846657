//! WASM bindings for the modelcmp crates.
//!
//! This crate provides in-memory, JSON-based wrappers around `modelcmp-ml`,
//! designed for browsers and sandboxed workers. Every public function accepts
//! simple types (`&str`, `usize`) and returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>", "kind": "invalid_input" | "parse" | "other"}`
//!
//! `#[wasm_bindgen]` annotations are applied only with the `wasm` feature.
//!
//! # Modules
//!
//! - [`metrics`] — Metric summaries, confusion matrices, summary tables
//! - [`models`] — Placeholder model prediction, comparison tables, sorting
//!
//! # Example
//!
//! ```
//! let json = modelcmp_wasm::summarize("[1,0,1,0]", "[1,1,0,0]");
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(v["ok"]["accuracy"], 0.5);
//! ```

pub mod error;
pub mod metrics;
pub mod models;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Re-exports ───────────────────────────────────────────────────────────

pub use metrics::{confusion_matrix, summarize, summary_table, JsConfusionMatrix};
pub use models::{
    compare_models, predict, sort_table, sort_table_by_index, JsComparison,
};
