//! Metric wrappers with JSON input/output.
//!
//! Label arrays are JSON arrays of `0`/`1` integers.

use serde::Serialize;

use modelcmp_core::{ModelCmpError, Result};
use modelcmp_ml::{
    confusion_counts, labels_from_ints, ConfusionCounts, ConfusionGrid, Label, SummaryTable,
    ViewConfig,
};

use crate::error::respond;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// ── Wrapper types ────────────────────────────────────────────────────────

/// Confusion counts together with their 2x2 display grid.
#[derive(Debug, Serialize)]
pub struct JsConfusionMatrix {
    pub counts: ConfusionCounts,
    pub grid: ConfusionGrid,
}

// ── Parsing ──────────────────────────────────────────────────────────────

/// Parse a JSON array of 0/1 integers into labels.
pub(crate) fn parse_labels(json: &str) -> Result<Vec<Label>> {
    let raw: Vec<i64> = serde_json::from_str(json)
        .map_err(|e| ModelCmpError::Parse(format!("invalid JSON label array: {e}")))?;
    labels_from_ints(&raw)
}

fn parse_pair(predicted_json: &str, actual_json: &str) -> Result<(Vec<Label>, Vec<Label>)> {
    Ok((parse_labels(predicted_json)?, parse_labels(actual_json)?))
}

// ── JSON boundary functions ──────────────────────────────────────────────

/// Accuracy, precision, recall, and F1 for two JSON label arrays.
///
/// Returns JSON `{"accuracy": .., "precision": .., "recall": .., "f1": ..}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn summarize(predicted_json: &str, actual_json: &str) -> String {
    respond(
        parse_pair(predicted_json, actual_json)
            .and_then(|(p, a)| modelcmp_ml::summarize(&p, &a)),
    )
}

/// Confusion counts and grid for two JSON label arrays.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn confusion_matrix(predicted_json: &str, actual_json: &str) -> String {
    respond(parse_pair(predicted_json, actual_json).and_then(|(p, a)| {
        let counts = confusion_counts(&p, &a)?;
        Ok(JsConfusionMatrix {
            grid: ConfusionGrid::new(&counts),
            counts,
        })
    }))
}

/// Header and formatted value row for one model's metrics.
///
/// `decimals`: digits after the decimal point (the original display used 2).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn summary_table(predicted_json: &str, actual_json: &str, decimals: usize) -> String {
    respond(parse_pair(predicted_json, actual_json).and_then(|(p, a)| {
        let summary = modelcmp_ml::summarize(&p, &a)?;
        Ok(SummaryTable::new(&summary, &ViewConfig { decimals }))
    }))
}
