//! Binary-classification metrics and model comparison for the modelcmp crates.
//!
//! - **Labels** — [`Label`], a 0/1 class label with validated conversions
//! - **Metrics** — [`ConfusionCounts`] and [`MetricSummary`] (accuracy,
//!   precision, recall, F1) from predicted/actual label pairs
//! - **Classifiers** — the [`Classifier`] capability and
//!   [`PlaceholderClassifier`], whose predictions are fixed-rate random draws
//! - **Comparison** — [`ComparisonTable`], one scored row per model, sortable
//!   in place by any column
//! - **Views** — display text for summaries, confusion grids, and tables
//!
//! # Example
//!
//! ```
//! use modelcmp_ml::{summarize, Label};
//!
//! let predicted = [Label::Positive, Label::Negative, Label::Positive, Label::Negative];
//! let actual = [Label::Positive, Label::Positive, Label::Negative, Label::Negative];
//! let s = summarize(&predicted, &actual).unwrap();
//! assert_eq!(s.accuracy, 0.5);
//! assert_eq!(s.f1, 0.5);
//! ```

pub mod classifier;
pub mod compare;
pub mod label;
pub mod metrics;
pub mod view;

pub use classifier::{Classifier, ClassifierKind, PlaceholderClassifier};
pub use compare::{Column, ComparisonTable, ScoredModel, SortDirection, Stripe};
pub use label::{labels_from_ints, Label};
pub use metrics::{
    confusion_counts, count_false_negatives, count_false_positives, count_true_negatives,
    count_true_positives, summarize, ConfusionCounts, Metric, MetricSummary,
};
pub use view::{ConfusionGrid, SummaryTable, TableView, ViewConfig};
