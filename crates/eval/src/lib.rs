pub mod normalize;
pub mod report;
pub mod scoring;

pub use normalize::normalize_label;
pub use report::{EvalReport, print_summary, write_report};
pub use scoring::{
    CategoryCount, DetectionMetrics, Evaluation, PredictionRecord, RecordResult, Scorer,
    composite_key,
};

use anyhow::{Context, Result};
use dataset::DatasetRecord;
use std::fs;
use std::path::Path;

/// Load the ground-truth dataset produced by build_dataset.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetRecord>> {
    let raw =
        fs::read_to_string(path).context(format!("Failed to read dataset: {:?}", path))?;
    let records =
        serde_json::from_str(&raw).context(format!("Failed to parse dataset: {:?}", path))?;
    Ok(records)
}

/// Load model predictions.
pub fn load_predictions(path: &Path) -> Result<Vec<PredictionRecord>> {
    let raw =
        fs::read_to_string(path).context(format!("Failed to read predictions: {:?}", path))?;
    let predictions = serde_json::from_str(&raw)
        .context(format!("Failed to parse predictions: {:?}", path))?;
    Ok(predictions)
}
