//! Model comparison tables.
//!
//! A [`ComparisonTable`] holds one [`ScoredModel`] row per model, scored
//! against a shared dataset. Rows can be re-sorted in place by any column;
//! each column remembers the direction its next sort will use and flips it
//! after every sort, so selecting the same column twice reverses the order.
//!
//! Metric columns compare numerically and the Type column compares
//! case-insensitively as text.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use modelcmp_core::{ensure_same_len, ModelCmpError, Result};

use crate::classifier::Classifier;
use crate::label::Label;
use crate::metrics::{Metric, MetricSummary};

// ---------------------------------------------------------------------------
// Columns and directions
// ---------------------------------------------------------------------------

/// A column of the comparison table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Type = 0,
    Accuracy = 1,
    Precision = 2,
    Recall = 3,
    F1 = 4,
}

impl Column {
    /// Every column in display order.
    pub const ALL: [Column; 5] = [
        Column::Type,
        Column::Accuracy,
        Column::Precision,
        Column::Recall,
        Column::F1,
    ];

    /// Position of the column in [`Column::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column at header position `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a valid column position.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            ModelCmpError::InvalidInput(format!(
                "column index {index} out of range (0..{})",
                Self::ALL.len()
            ))
        })
    }

    /// Header text without any sort indicator.
    pub fn title(self) -> &'static str {
        match self {
            Column::Type => "Type",
            Column::Accuracy => "Accuracy",
            Column::Precision => "Precision",
            Column::Recall => "Recall",
            Column::F1 => "F1 Score",
        }
    }

    /// The metric shown in this column, `None` for Type.
    pub fn metric(self) -> Option<Metric> {
        match self {
            Column::Type => None,
            Column::Accuracy => Some(Metric::Accuracy),
            Column::Precision => Some(Metric::Precision),
            Column::Recall => Some(Metric::Recall),
            Column::F1 => Some(Metric::F1),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Column {
    type Err = ModelCmpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "type" => Ok(Column::Type),
            "accuracy" => Ok(Column::Accuracy),
            "precision" => Ok(Column::Precision),
            "recall" => Ok(Column::Recall),
            "f1" | "f1 score" | "f1_score" => Ok(Column::F1),
            _ => Err(ModelCmpError::Parse(format!(
                "unknown column: {s} (expected type, accuracy, precision, recall, or f1)"
            ))),
        }
    }
}

/// Order in which a sort arranges rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Zebra-stripe class of a row, derived from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stripe {
    Shaded,
    Plain,
}

impl Stripe {
    /// Stripe for the row at 0-based `position`; the first row is shaded.
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            Stripe::Shaded
        } else {
            Stripe::Plain
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One model's scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredModel {
    #[serde(rename = "type")]
    pub model_type: String,
    pub summary: MetricSummary,
}

impl ScoredModel {
    pub fn new(model_type: impl Into<String>, summary: MetricSummary) -> Self {
        Self {
            model_type: model_type.into(),
            summary,
        }
    }

    /// Ascending comparison on a single column.
    pub fn compare_by(&self, other: &Self, column: Column) -> Ordering {
        match column.metric() {
            Some(metric) => self.summary.get(metric).total_cmp(&other.summary.get(metric)),
            None => self
                .model_type
                .to_lowercase()
                .cmp(&other.model_type.to_lowercase()),
        }
    }
}

// ---------------------------------------------------------------------------
// ComparisonTable
// ---------------------------------------------------------------------------

/// Rows of scored models plus per-column sort state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    rows: Vec<ScoredModel>,
    sort_column: Option<Column>,
    directions: [SortDirection; 5],
}

impl ComparisonTable {
    /// Wrap pre-scored rows; every column starts ascending.
    pub fn new(rows: Vec<ScoredModel>) -> Self {
        Self {
            rows,
            sort_column: None,
            directions: [SortDirection::Ascending; 5],
        }
    }

    /// Predict with every model on `data` and score against `actual`.
    ///
    /// Rows keep the order of `models`.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` has a bad shape or its row count differs
    /// from `actual.len()`.
    pub fn build(
        models: &[&dyn Classifier],
        data: &[f64],
        n_features: usize,
        actual: &[Label],
    ) -> Result<Self> {
        Self::build_with_rng(models, data, n_features, actual, &mut rand::rng())
    }

    /// Like [`ComparisonTable::build`], drawing predictions from `rng`.
    ///
    /// # Errors
    ///
    /// See [`ComparisonTable::build`].
    pub fn build_with_rng(
        models: &[&dyn Classifier],
        data: &[f64],
        n_features: usize,
        actual: &[Label],
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        let mut rows = Vec::with_capacity(models.len());
        for model in models {
            let predicted = model.predict_with_rng(data, n_features, rng)?;
            ensure_same_len("predicted/actual", predicted.len(), actual.len())?;
            let summary = model.summarize(&predicted, actual)?;
            rows.push(ScoredModel::new(model.name(), summary));
        }
        debug!(models = rows.len(), samples = actual.len(), "built comparison table");
        Ok(Self::new(rows))
    }

    /// Rows in current order.
    pub fn rows(&self) -> &[ScoredModel] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column of the most recent sort, if any.
    pub fn sort_column(&self) -> Option<Column> {
        self.sort_column
    }

    /// Direction the next sort on `column` will use.
    pub fn next_direction(&self, column: Column) -> SortDirection {
        self.directions[column.index()]
    }

    /// Stripe of each row in current order.
    pub fn stripes(&self) -> impl Iterator<Item = Stripe> + '_ {
        (0..self.rows.len()).map(Stripe::for_position)
    }

    /// Sort rows by `column` in its remembered direction, then flip that
    /// direction. Returns the direction that was applied.
    ///
    /// Equal values keep their current relative order.
    pub fn sort_by(&mut self, column: Column) -> SortDirection {
        let idx = column.index();
        let direction = self.directions[idx];
        self.rows
            .sort_by(|a, b| direction.apply(a.compare_by(b, column)));
        self.sort_column = Some(column);
        self.directions[idx] = direction.toggle();
        debug!(%column, ?direction, rows = self.rows.len(), "sorted comparison table");
        direction
    }

    /// [`ComparisonTable::sort_by`] with the column chosen by header index.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a valid column position.
    pub fn sort_by_index(&mut self, index: usize) -> Result<SortDirection> {
        Ok(self.sort_by(Column::from_index(index)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::PlaceholderClassifier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn row(name: &str, accuracy: f64, precision: f64, recall: f64, f1: f64) -> ScoredModel {
        ScoredModel::new(
            name,
            MetricSummary {
                accuracy,
                precision,
                recall,
                f1,
            },
        )
    }

    fn sample_table() -> ComparisonTable {
        ComparisonTable::new(vec![
            row("Random Forest", 0.67, 0.5, 1.0, 0.67),
            row("K-Nearest Neighbors", 0.33, 1.0, 0.5, 0.5),
            row("Support Vector Classifier", 1.0, 0.25, 0.0, 0.0),
            row("Logistic regression", 0.33, 0.0, 0.25, 0.1),
        ])
    }

    fn names(t: &ComparisonTable) -> Vec<&str> {
        t.rows().iter().map(|r| r.model_type.as_str()).collect()
    }

    fn accuracies(t: &ComparisonTable) -> Vec<f64> {
        t.rows().iter().map(|r| r.summary.accuracy).collect()
    }

    #[test]
    fn columns_in_display_order() {
        let titles: Vec<&str> = Column::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(titles, ["Type", "Accuracy", "Precision", "Recall", "F1 Score"]);
        for (i, c) in Column::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
            assert_eq!(Column::from_index(i).unwrap(), *c);
        }
        assert!(Column::from_index(5).is_err());
    }

    #[test]
    fn column_from_str() {
        assert_eq!("Accuracy".parse::<Column>().unwrap(), Column::Accuracy);
        assert_eq!("f1".parse::<Column>().unwrap(), Column::F1);
        assert_eq!(" TYPE ".parse::<Column>().unwrap(), Column::Type);
        assert!("auc".parse::<Column>().is_err());
    }

    #[test]
    fn first_sort_ascending_then_descending() {
        let mut t = sample_table();
        assert_eq!(t.next_direction(Column::Accuracy), SortDirection::Ascending);

        assert_eq!(t.sort_by(Column::Accuracy), SortDirection::Ascending);
        assert_eq!(accuracies(&t), [0.33, 0.33, 0.67, 1.0]);
        assert_eq!(t.next_direction(Column::Accuracy), SortDirection::Descending);
        assert_eq!(t.sort_column(), Some(Column::Accuracy));

        assert_eq!(t.sort_by(Column::Accuracy), SortDirection::Descending);
        assert_eq!(accuracies(&t), [1.0, 0.67, 0.33, 0.33]);
        assert_eq!(t.next_direction(Column::Accuracy), SortDirection::Ascending);
    }

    #[test]
    fn directions_are_per_column() {
        let mut t = sample_table();
        t.sort_by(Column::Accuracy);
        assert_eq!(t.next_direction(Column::Recall), SortDirection::Ascending);
        assert_eq!(t.sort_by(Column::Recall), SortDirection::Ascending);
        let recalls: Vec<f64> = t.rows().iter().map(|r| r.summary.recall).collect();
        assert_eq!(recalls, [0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn ties_keep_relative_order() {
        let mut t = sample_table();
        t.sort_by(Column::Accuracy);
        // Both 0.33 rows stay in input order.
        assert_eq!(&names(&t)[..2], ["K-Nearest Neighbors", "Logistic regression"]);
        t.sort_by(Column::Accuracy);
        assert_eq!(&names(&t)[2..], ["K-Nearest Neighbors", "Logistic regression"]);
    }

    #[test]
    fn type_sort_ignores_case() {
        let mut t = sample_table();
        t.sort_by(Column::Type);
        assert_eq!(
            names(&t),
            [
                "K-Nearest Neighbors",
                "Logistic regression",
                "Random Forest",
                "Support Vector Classifier"
            ]
        );
    }

    #[test]
    fn numeric_not_lexicographic() {
        let mut t = ComparisonTable::new(vec![
            row("a", 10.0, 0.0, 0.0, 0.0),
            row("b", 2.0, 0.0, 0.0, 0.0),
        ]);
        t.sort_by(Column::Accuracy);
        assert_eq!(names(&t), ["b", "a"]);
    }

    #[test]
    fn sort_by_index_matches_column() {
        let mut t = sample_table();
        assert_eq!(t.sort_by_index(4).unwrap(), SortDirection::Ascending);
        assert_eq!(t.sort_column(), Some(Column::F1));
        assert!(t.sort_by_index(9).is_err());
    }

    #[test]
    fn stripes_follow_position() {
        let mut t = sample_table();
        let expected = [Stripe::Shaded, Stripe::Plain, Stripe::Shaded, Stripe::Plain];
        assert_eq!(t.stripes().collect::<Vec<_>>(), expected);
        t.sort_by(Column::F1);
        assert_eq!(t.stripes().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn build_keeps_model_order() {
        let rf = PlaceholderClassifier::random_forest(1);
        let knn = PlaceholderClassifier::k_nearest_neighbors(3);
        let svc = PlaceholderClassifier::svc();
        let logit = PlaceholderClassifier::logistic_regression();
        let models: [&dyn Classifier; 4] = [&rf, &knn, &svc, &logit];

        let x = [1.0, 0.0, 1.0];
        let y = [Label::Positive, Label::Negative, Label::Positive];
        let mut rng = StdRng::seed_from_u64(11);
        let t = ComparisonTable::build_with_rng(&models, &x, 1, &y, &mut rng).unwrap();

        assert_eq!(
            names(&t),
            [
                "Random Forest",
                "K-Nearest Neighbors",
                "Support Vector Classifier",
                "Logistic regression"
            ]
        );
        assert_eq!(t.sort_column(), None);
        for r in t.rows() {
            assert!((0.0..=1.0).contains(&r.summary.accuracy));
        }
    }

    #[test]
    fn build_rejects_row_count_mismatch() {
        let svc = PlaceholderClassifier::svc();
        let models: [&dyn Classifier; 1] = [&svc];
        let err = ComparisonTable::build(&models, &[1.0, 0.0], 1, &[Label::Positive]).unwrap_err();
        assert!(matches!(err, ModelCmpError::InvalidInput(_)));
    }

    #[test]
    fn empty_table_sorts() {
        let mut t = ComparisonTable::new(Vec::new());
        assert!(t.is_empty());
        t.sort_by(Column::Precision);
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn serde_roundtrip_keeps_sort_state() {
        let mut t = sample_table();
        t.sort_by(Column::Recall);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains(r#""type":"Random Forest""#));
        let back: ComparisonTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.next_direction(Column::Recall), SortDirection::Descending);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn scored() -> impl Strategy<Value = ScoredModel> {
        ("[a-zA-Z ]{1,12}", 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(
            |(name, accuracy, precision, recall, f1)| {
                ScoredModel::new(
                    name,
                    MetricSummary {
                        accuracy,
                        precision,
                        recall,
                        f1,
                    },
                )
            },
        )
    }

    fn column() -> impl Strategy<Value = Column> {
        (0usize..5).prop_map(|i| Column::ALL[i])
    }

    fn is_ordered(rows: &[ScoredModel], column: Column, direction: SortDirection) -> bool {
        rows.windows(2)
            .all(|w| direction.apply(w[0].compare_by(&w[1], column)) != Ordering::Greater)
    }

    proptest! {
        #[test]
        fn repeated_sorts_alternate_monotonic(
            rows in proptest::collection::vec(scored(), 0..12),
            col in column(),
        ) {
            let mut t = ComparisonTable::new(rows);
            let first = t.sort_by(col);
            prop_assert_eq!(first, SortDirection::Ascending);
            prop_assert!(is_ordered(t.rows(), col, SortDirection::Ascending));
            let second = t.sort_by(col);
            prop_assert_eq!(second, SortDirection::Descending);
            prop_assert!(is_ordered(t.rows(), col, SortDirection::Descending));
        }

        #[test]
        fn sort_is_a_permutation(
            rows in proptest::collection::vec(scored(), 0..12),
            col in column(),
        ) {
            let mut t = ComparisonTable::new(rows.clone());
            t.sort_by(col);
            prop_assert_eq!(t.len(), rows.len());
            for r in &rows {
                let before = rows.iter().filter(|x| *x == r).count();
                let after = t.rows().iter().filter(|x| *x == r).count();
                prop_assert_eq!(before, after);
            }
        }
    }
}
