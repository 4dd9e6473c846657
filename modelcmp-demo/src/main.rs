//! Scores the four placeholder models on a tiny dataset and prints the
//! resulting views as JSON.
//!
//! Log verbosity comes from `MODELCMP_LOG` (an `EnvFilter` directive,
//! default `info`).

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use modelcmp_core::{LogSummary, ModelCmpError, Result};
use modelcmp_ml::{
    Classifier, Column, ComparisonTable, ConfusionGrid, Label, PlaceholderClassifier,
    SummaryTable, TableView, ViewConfig,
};

const LOG_ENV: &str = "MODELCMP_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(title: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ModelCmpError::Other(format!("serializing {title}: {e}")))?;
    println!("== {title}\n{json}");
    Ok(())
}

fn run() -> Result<()> {
    let config = ViewConfig::default();

    let x = [1.0, 0.0, 1.0];
    let y = [Label::Positive, Label::Negative, Label::Positive];

    let mut rf = PlaceholderClassifier::random_forest(1);
    let mut knn = PlaceholderClassifier::k_nearest_neighbors(3);
    let mut svc = PlaceholderClassifier::svc();
    let mut logit = PlaceholderClassifier::logistic_regression();

    rf.train(&x, 1, &y);
    knn.train(&x, 1, &y);
    svc.train(&x, 1, &y);
    logit.train(&x, 1, &y);

    let predicted = rf.predict(&x, 1)?;
    let summary = rf.summarize(&predicted, &y)?;
    let counts = rf.confusion_counts(&predicted, &y)?;
    info!(model = rf.name(), summary = %summary.log_summary(), counts = %counts.log_summary(), "scored");

    print_json("summary", &SummaryTable::new(&summary, &config))?;
    print_json("confusion matrix", &ConfusionGrid::new(&counts))?;

    let models: [&dyn Classifier; 4] = [&rf, &knn, &svc, &logit];
    let mut table = ComparisonTable::build(&models, &x, 1, &y)?;
    print_json("comparison", &TableView::new(&table, &config))?;

    for _ in 0..2 {
        let direction = table.sort_by(Column::Accuracy);
        info!(column = %Column::Accuracy, ?direction, "sorted");
        print_json("comparison by accuracy", &TableView::new(&table, &config))?;
    }
    Ok(())
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        tracing::error!(error = %e, "demo failed");
        std::process::exit(1);
    }
}
