//! Placeholder classifiers.
//!
//! None of these models learn anything. Each variant carries a fixed
//! probability of predicting the positive class, and `predict` draws one
//! label per input row from that probability without looking at the row.
//! Hyper-parameters such as `n_estimators` are kept for display and
//! serialization only.
//!
//! Data is flat row-major `&[f64]` with an `n_features` parameter, consistent
//! with the rest of the modelcmp-ml crate.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use modelcmp_core::{ModelCmpError, Result};

use crate::label::Label;
use crate::metrics::{self, ConfusionCounts, MetricSummary};

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// What the comparison table needs from a model.
pub trait Classifier {
    /// Name shown in the Type column of a comparison table.
    fn name(&self) -> &str;

    /// The variant and its hyper-parameters.
    fn kind(&self) -> ClassifierKind;

    /// Fit the model to `(data, labels)`.
    fn train(&mut self, data: &[f64], n_features: usize, labels: &[Label]);

    /// Predict one label per row of `data`, drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_features` is 0 or `data` is not a whole number
    /// of rows.
    fn predict_with_rng(
        &self,
        data: &[f64],
        n_features: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Label>>;

    /// Predict one label per row of `data` using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// See [`Classifier::predict_with_rng`].
    fn predict(&self, data: &[f64], n_features: usize) -> Result<Vec<Label>> {
        self.predict_with_rng(data, n_features, &mut rand::rng())
    }

    /// Metric summary of `predicted` against `actual`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices have different lengths.
    fn summarize(&self, predicted: &[Label], actual: &[Label]) -> Result<MetricSummary> {
        metrics::summarize(predicted, actual)
    }

    /// Confusion counts of `predicted` against `actual`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices have different lengths.
    fn confusion_counts(&self, predicted: &[Label], actual: &[Label]) -> Result<ConfusionCounts> {
        metrics::confusion_counts(predicted, actual)
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

fn default_n_estimators() -> usize {
    100
}

fn default_n_neighbors() -> usize {
    5
}

/// The placeholder model variants.
///
/// Deserializes from `{"kind": "random_forest", "n_estimators": 10}`,
/// `{"kind": "k_nearest_neighbors", "n_neighbors": 3}`, `{"kind": "svc"}` or
/// `{"kind": "logistic_regression"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierKind {
    RandomForest {
        #[serde(default = "default_n_estimators")]
        n_estimators: usize,
    },
    KNearestNeighbors {
        #[serde(default = "default_n_neighbors")]
        n_neighbors: usize,
    },
    Svc,
    LogisticRegression,
}

impl ClassifierKind {
    /// Probability that a single prediction is [`Label::Positive`].
    pub fn positive_rate(&self) -> f64 {
        match self {
            ClassifierKind::RandomForest { .. } => 0.7,
            ClassifierKind::KNearestNeighbors { .. } => 0.4,
            ClassifierKind::Svc => 0.6,
            ClassifierKind::LogisticRegression => 0.25,
        }
    }

    /// Name shown in the Type column.
    pub fn display_name(&self) -> &'static str {
        match self {
            ClassifierKind::RandomForest { .. } => "Random Forest",
            ClassifierKind::KNearestNeighbors { .. } => "K-Nearest Neighbors",
            ClassifierKind::Svc => "Support Vector Classifier",
            ClassifierKind::LogisticRegression => "Logistic regression",
        }
    }
}

// ---------------------------------------------------------------------------
// PlaceholderClassifier
// ---------------------------------------------------------------------------

/// A model whose predictions are independent random draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderClassifier {
    kind: ClassifierKind,
}

impl PlaceholderClassifier {
    pub fn new(kind: ClassifierKind) -> Self {
        Self { kind }
    }

    /// Random forest with `n_estimators` trees.
    pub fn random_forest(n_estimators: usize) -> Self {
        Self::new(ClassifierKind::RandomForest { n_estimators })
    }

    /// K-nearest neighbors with `n_neighbors` neighbors.
    pub fn k_nearest_neighbors(n_neighbors: usize) -> Self {
        Self::new(ClassifierKind::KNearestNeighbors { n_neighbors })
    }

    pub fn svc() -> Self {
        Self::new(ClassifierKind::Svc)
    }

    pub fn logistic_regression() -> Self {
        Self::new(ClassifierKind::LogisticRegression)
    }
}

impl Classifier for PlaceholderClassifier {
    fn name(&self) -> &str {
        self.kind.display_name()
    }

    fn kind(&self) -> ClassifierKind {
        self.kind
    }

    fn train(&mut self, data: &[f64], n_features: usize, labels: &[Label]) {
        // The prediction rule is fixed by the variant; inputs are ignored.
        debug!(
            model = self.name(),
            values = data.len(),
            n_features,
            labels = labels.len(),
            "train"
        );
    }

    fn predict_with_rng(
        &self,
        data: &[f64],
        n_features: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Label>> {
        let n_rows = row_count(data, n_features)?;
        let rate = self.kind.positive_rate();
        debug!(model = self.name(), n_rows, rate, "predict");
        Ok((0..n_rows).map(|_| Label::from(rng.random_bool(rate))).collect())
    }
}

/// Number of rows in a flat row-major matrix.
fn row_count(data: &[f64], n_features: usize) -> Result<usize> {
    if n_features == 0 {
        return Err(ModelCmpError::InvalidInput("n_features must be > 0".into()));
    }
    if data.len() % n_features != 0 {
        return Err(ModelCmpError::InvalidInput(format!(
            "data length {} not divisible by n_features {}",
            data.len(),
            n_features
        )));
    }
    Ok(data.len() / n_features)
}
