//! Display-ready tabular views.
//!
//! These types carry exactly the text a presentation layer needs (header
//! labels, formatted cell values, sort indicators, row stripes) and no
//! markup or styling.

use serde::{Deserialize, Serialize};

use crate::compare::{Column, ComparisonTable, SortDirection, Stripe};
use crate::metrics::{ConfusionCounts, MetricSummary};

/// Indicator on a header whose next sort is ascending.
pub const ASCENDING_ICON: char = '\u{25B2}';
/// Indicator on a header whose next sort is descending.
pub const DESCENDING_ICON: char = '\u{25BC}';

/// Formatting options for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Digits after the decimal point for metric values.
    pub decimals: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

impl ViewConfig {
    fn format(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.decimals)
    }
}

// ---------------------------------------------------------------------------
// Single-model summary
// ---------------------------------------------------------------------------

/// Header row and value row for one model's metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub headers: Vec<String>,
    pub values: Vec<String>,
}

impl SummaryTable {
    pub fn new(summary: &MetricSummary, config: &ViewConfig) -> Self {
        let headers = ["Accuracy", "Precision", "Recall", "F1 score"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let values = [
            summary.accuracy,
            summary.precision,
            summary.recall,
            summary.f1,
        ]
        .iter()
        .map(|&v| config.format(v))
        .collect();
        Self { headers, values }
    }
}

// ---------------------------------------------------------------------------
// Confusion matrix grid
// ---------------------------------------------------------------------------

/// Which confusion category a grid cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TruePositive,
    FalsePositive,
    FalseNegative,
    TrueNegative,
}

impl Outcome {
    /// Whether the cell counts correct predictions.
    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::TruePositive | Outcome::TrueNegative)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub outcome: Outcome,
    pub count: usize,
    pub correct: bool,
}

impl GridCell {
    fn new(outcome: Outcome, count: usize) -> Self {
        Self {
            outcome,
            count,
            correct: outcome.is_correct(),
        }
    }
}

/// 2x2 confusion matrix laid out as `[[tp, fp], [fn, tn]]`.
///
/// Columns are actual Positive/Negative, rows are predicted
/// Positive/Negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionGrid {
    pub actual_title: String,
    pub predicted_title: String,
    pub class_labels: [String; 2],
    pub cells: [[GridCell; 2]; 2],
}

impl ConfusionGrid {
    pub fn new(counts: &ConfusionCounts) -> Self {
        Self {
            actual_title: "Actual Values".into(),
            predicted_title: "Predicted Values".into(),
            class_labels: ["Positive".into(), "Negative".into()],
            cells: [
                [
                    GridCell::new(Outcome::TruePositive, counts.tp),
                    GridCell::new(Outcome::FalsePositive, counts.fp),
                ],
                [
                    GridCell::new(Outcome::FalseNegative, counts.fn_),
                    GridCell::new(Outcome::TrueNegative, counts.tn),
                ],
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Comparison table
// ---------------------------------------------------------------------------

/// One header cell of the comparison view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub column: Column,
    /// Title followed by the indicator for `next`.
    pub label: String,
    /// Direction the next sort on this column will apply.
    pub next: SortDirection,
}

/// One body row of the comparison view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    pub stripe: Stripe,
    pub cells: Vec<String>,
}

/// Text for every cell of a [`ComparisonTable`] in its current order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
}

impl TableView {
    pub fn new(table: &ComparisonTable, config: &ViewConfig) -> Self {
        let headers = Column::ALL
            .iter()
            .map(|&column| {
                let next = table.next_direction(column);
                let icon = match next {
                    SortDirection::Ascending => ASCENDING_ICON,
                    SortDirection::Descending => DESCENDING_ICON,
                };
                HeaderCell {
                    column,
                    label: format!("{}{icon}", column.title()),
                    next,
                }
            })
            .collect();

        let rows = table
            .rows()
            .iter()
            .zip(table.stripes())
            .map(|(row, stripe)| {
                let cells = Column::ALL
                    .iter()
                    .map(|&column| match column.metric() {
                        Some(metric) => config.format(row.summary.get(metric)),
                        None => row.model_type.clone(),
                    })
                    .collect();
                RowView { stripe, cells }
            })
            .collect();

        Self { headers, rows }
    }
}
