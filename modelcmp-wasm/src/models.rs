//! Placeholder model and comparison-table wrappers with JSON input/output.
//!
//! Models are described as JSON objects, e.g.
//! `{"kind": "random_forest", "n_estimators": 1}`, `{"kind": "svc"}`.
//! Comparison tables round-trip through JSON so the caller can keep the
//! table between sorts.

use serde::Serialize;

use modelcmp_core::{ModelCmpError, Result};
use modelcmp_ml::{
    Classifier, Column, ComparisonTable, Label, PlaceholderClassifier, SortDirection, TableView,
    ViewConfig,
};

use crate::error::respond;
use crate::metrics::parse_labels;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// ── Wrapper types ────────────────────────────────────────────────────────

/// A comparison table plus its display text.
///
/// `applied` is the direction of the sort that produced this ordering, if
/// any.
#[derive(Debug, Serialize)]
pub struct JsComparison {
    pub table: ComparisonTable,
    pub view: TableView,
    pub applied: Option<SortDirection>,
}

impl JsComparison {
    fn new(table: ComparisonTable, applied: Option<SortDirection>, config: &ViewConfig) -> Self {
        let view = TableView::new(&table, config);
        Self {
            table,
            view,
            applied,
        }
    }
}

// ── Parsing ──────────────────────────────────────────────────────────────

fn parse_f64_array(json: &str) -> Result<Vec<f64>> {
    serde_json::from_str::<Vec<f64>>(json)
        .map_err(|e| ModelCmpError::Parse(format!("invalid JSON array: {e}")))
}

fn parse_model(json: &str) -> Result<PlaceholderClassifier> {
    serde_json::from_str(json).map_err(|e| ModelCmpError::Parse(format!("invalid model: {e}")))
}

fn parse_models(json: &str) -> Result<Vec<PlaceholderClassifier>> {
    serde_json::from_str(json)
        .map_err(|e| ModelCmpError::Parse(format!("invalid model array: {e}")))
}

fn parse_table(json: &str) -> Result<ComparisonTable> {
    serde_json::from_str(json)
        .map_err(|e| ModelCmpError::Parse(format!("invalid comparison table: {e}")))
}

fn try_predict(model_json: &str, x_json: &str, n_features: usize) -> Result<Vec<Label>> {
    let model = parse_model(model_json)?;
    let x = parse_f64_array(x_json)?;
    model.predict(&x, n_features)
}

fn try_compare(
    models_json: &str,
    x_json: &str,
    n_features: usize,
    y_json: &str,
    config: &ViewConfig,
) -> Result<JsComparison> {
    let models = parse_models(models_json)?;
    let x = parse_f64_array(x_json)?;
    let y = parse_labels(y_json)?;
    let refs: Vec<&dyn Classifier> = models.iter().map(|m| m as &dyn Classifier).collect();
    let table = ComparisonTable::build(&refs, &x, n_features, &y)?;
    Ok(JsComparison::new(table, None, config))
}

fn try_sort(table_json: &str, column: Column, config: &ViewConfig) -> Result<JsComparison> {
    let mut table = parse_table(table_json)?;
    let applied = table.sort_by(column);
    Ok(JsComparison::new(table, Some(applied), config))
}

// ── JSON boundary functions ──────────────────────────────────────────────

/// Predict labels for flat row-major `x_json` with a placeholder model.
///
/// Returns a JSON array of 0/1 labels, one per row.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn predict(model_json: &str, x_json: &str, n_features: usize) -> String {
    respond(try_predict(model_json, x_json, n_features))
}

/// Score every model on `(x_json, y_json)` and build a comparison table.
///
/// `models_json`: JSON array of model objects, kept in input order.
/// `x_json`: flat row-major JSON array of numbers.
/// `n_features`: number of values per row.
/// `y_json`: JSON array of 0/1 labels, one per row.
/// `decimals`: digits after the decimal point in the view cells.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn compare_models(
    models_json: &str,
    x_json: &str,
    n_features: usize,
    y_json: &str,
    decimals: usize,
) -> String {
    respond(try_compare(
        models_json,
        x_json,
        n_features,
        y_json,
        &ViewConfig { decimals },
    ))
}

/// Re-sort a table previously returned by [`compare_models`] or
/// [`sort_table`].
///
/// `table_json`: the `table` field of an earlier result.
/// `column`: `"type"`, `"accuracy"`, `"precision"`, `"recall"`, or `"f1"`.
/// `decimals`: as in [`compare_models`]; the table itself stores raw values.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn sort_table(table_json: &str, column: &str, decimals: usize) -> String {
    let config = ViewConfig { decimals };
    respond(column.parse::<Column>().and_then(|c| try_sort(table_json, c, &config)))
}

/// Like [`sort_table`], selecting the column by header position (0 = Type).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn sort_table_by_index(table_json: &str, index: usize, decimals: usize) -> String {
    let config = ViewConfig { decimals };
    respond(Column::from_index(index).and_then(|c| try_sort(table_json, c, &config)))
}
