//! Binary classification metrics.
//!
//! Counts the four confusion categories between predicted and actual labels
//! and derives accuracy, precision, recall, and F1 from them. Rates whose
//! denominator is zero are defined as 0.0 rather than treated as errors.

use serde::{Deserialize, Serialize};

use modelcmp_core::{ensure_same_len, LogSummary, Result};

use crate::label::Label;

// ---------------------------------------------------------------------------
// Confusion counts
// ---------------------------------------------------------------------------

/// True/false positive/negative counts for a binary classifier.
///
/// The four counts always sum to the length of the label sequences they were
/// computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Count all four categories in a single scan.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices have different lengths.
    pub fn from_labels(predicted: &[Label], actual: &[Label]) -> Result<Self> {
        ensure_same_len("predicted/actual", predicted.len(), actual.len())?;

        let mut counts = Self::default();
        for (&p, &a) in predicted.iter().zip(actual.iter()) {
            match (p, a) {
                (Label::Positive, Label::Positive) => counts.tp += 1,
                (Label::Positive, Label::Negative) => counts.fp += 1,
                (Label::Negative, Label::Negative) => counts.tn += 1,
                (Label::Negative, Label::Positive) => counts.fn_ += 1,
            }
        }
        Ok(counts)
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    /// Fraction of correct predictions: `(TP + TN) / N`.
    ///
    /// Returns 0.0 for an empty sample.
    pub fn accuracy(&self) -> f64 {
        ratio(self.tp + self.tn, self.total())
    }

    /// Precision: `TP / (TP + FP)`.
    ///
    /// Returns 0.0 if `TP + FP == 0`.
    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    /// Recall (sensitivity): `TP / (TP + FN)`.
    ///
    /// Returns 0.0 if `TP + FN == 0`.
    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// F1 score (harmonic mean of precision and recall).
    ///
    /// Returns 0.0 if both precision and recall are 0.
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    /// All derived rates at once.
    pub fn rates(&self) -> MetricSummary {
        MetricSummary {
            accuracy: self.accuracy(),
            precision: self.precision(),
            recall: self.recall(),
            f1: self.f1(),
        }
    }
}

impl LogSummary for ConfusionCounts {
    fn log_summary(&self) -> String {
        format!("tp={} fp={} tn={} fn={}", self.tp, self.fp, self.tn, self.fn_)
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// One of the four derived rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Accuracy,
    Precision,
    Recall,
    F1,
}

/// Derived rates for one set of predictions, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl MetricSummary {
    /// Look up a single rate.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Accuracy => self.accuracy,
            Metric::Precision => self.precision,
            Metric::Recall => self.recall,
            Metric::F1 => self.f1,
        }
    }
}

impl LogSummary for MetricSummary {
    fn log_summary(&self) -> String {
        format!(
            "accuracy={:.2} precision={:.2} recall={:.2} f1={:.2}",
            self.accuracy, self.precision, self.recall, self.f1
        )
    }
}

// ---------------------------------------------------------------------------
// Standalone functions
// ---------------------------------------------------------------------------

/// Confusion counts for a pair of label sequences.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn confusion_counts(predicted: &[Label], actual: &[Label]) -> Result<ConfusionCounts> {
    ConfusionCounts::from_labels(predicted, actual)
}

/// Accuracy, precision, recall, and F1 for a pair of label sequences.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn summarize(predicted: &[Label], actual: &[Label]) -> Result<MetricSummary> {
    Ok(ConfusionCounts::from_labels(predicted, actual)?.rates())
}

/// Number of positions predicted positive that are actually positive.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn count_true_positives(predicted: &[Label], actual: &[Label]) -> Result<usize> {
    count_where(predicted, actual, Label::Positive, Label::Positive)
}

/// Number of positions predicted negative that are actually negative.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn count_true_negatives(predicted: &[Label], actual: &[Label]) -> Result<usize> {
    count_where(predicted, actual, Label::Negative, Label::Negative)
}

/// Number of positions predicted positive that are actually negative.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn count_false_positives(predicted: &[Label], actual: &[Label]) -> Result<usize> {
    count_where(predicted, actual, Label::Positive, Label::Negative)
}

/// Number of positions predicted negative that are actually positive.
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn count_false_negatives(predicted: &[Label], actual: &[Label]) -> Result<usize> {
    count_where(predicted, actual, Label::Negative, Label::Positive)
}

fn count_where(
    predicted: &[Label],
    actual: &[Label],
    want_predicted: Label,
    want_actual: Label,
) -> Result<usize> {
    ensure_same_len("predicted/actual", predicted.len(), actual.len())?;
    Ok(predicted
        .iter()
        .zip(actual.iter())
        .filter(|&(&p, &a)| p == want_predicted && a == want_actual)
        .count())
}
