use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::normalize::normalize_label;
use dataset::DatasetRecord;

/// A single model prediction to score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub statement: String,
    #[serde(default)]
    pub pred: String,
}

/// Outcome for one scored prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResult {
    pub video: String,
    pub statement: String,
    pub ground_truth: String,
    pub predicted: String,
    pub correct: bool,
    pub model: String,
}

/// Correct/total tally for one category or model.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CategoryCount {
    pub correct: usize,
    pub total: usize,
}

impl CategoryCount {
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.total)
    }
}

/// Precision/recall/F1 with hallucination as the positive class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectionMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Aggregated scoring output over all joined predictions.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
    pub category_stats: HashMap<String, CategoryCount>,
    pub model_stats: HashMap<String, CategoryCount>,
    pub results: Vec<RecordResult>,
}

impl Evaluation {
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.total)
    }

    pub fn detection_metrics(&self) -> DetectionMetrics {
        let true_positives = self.count_outcomes("hallucination", "hallucination");
        let false_positives = self.count_outcomes("accurate", "hallucination");
        let false_negatives = self.count_outcomes("hallucination", "accurate");

        let precision = ratio(true_positives, true_positives + false_positives);
        let recall = ratio(true_positives, true_positives + false_negatives);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        DetectionMetrics {
            precision,
            recall,
            f1,
        }
    }

    fn count_outcomes(&self, ground_truth: &str, predicted: &str) -> usize {
        self.results
            .iter()
            .filter(|r| r.ground_truth == ground_truth && r.predicted == predicted)
            .count()
    }
}

struct GroundTruthEntry {
    ground_truth: String,
    model: String,
}

/// Ground-truth index keyed by video path and statement text.
pub struct Scorer {
    index: HashMap<String, GroundTruthEntry>,
}

/// Join key for a prediction and its ground-truth record.
pub fn composite_key(video: &str, statement: &str) -> String {
    format!("{}||{}", video, statement)
}

impl Scorer {
    /// Duplicate keys overwrite: last record wins.
    pub fn new(records: &[DatasetRecord]) -> Self {
        let mut index = HashMap::new();
        for record in records {
            index.insert(
                composite_key(&record.video, &record.statement),
                GroundTruthEntry {
                    ground_truth: record.ground_truth.as_str().to_string(),
                    model: record.model.clone(),
                },
            );
        }
        Self { index }
    }

    /// Join predictions against the index and accumulate tallies.
    ///
    /// Predictions with no matching ground truth are skipped with a warning
    /// and do not count toward the total. The per-model tally uses the model
    /// recorded on the ground-truth side.
    pub fn score(&self, predictions: &[PredictionRecord]) -> Evaluation {
        let mut results = Vec::new();
        let mut correct = 0;
        let mut total = 0;
        let mut category_stats: HashMap<String, CategoryCount> = HashMap::new();
        let mut model_stats: HashMap<String, CategoryCount> = HashMap::new();

        for pred in predictions {
            let predicted = normalize_label(&pred.pred);
            let key = composite_key(&pred.video, &pred.statement);

            let entry = match self.index.get(&key) {
                Some(entry) => entry,
                None => {
                    warn!(
                        "No ground truth found for: {}...",
                        key.chars().take(100).collect::<String>()
                    );
                    continue;
                }
            };

            let is_correct = predicted == entry.ground_truth;
            if is_correct {
                correct += 1;
            }
            total += 1;

            let category = category_stats.entry(entry.ground_truth.clone()).or_default();
            category.total += 1;
            if is_correct {
                category.correct += 1;
            }

            let model = model_stats.entry(entry.model.clone()).or_default();
            model.total += 1;
            if is_correct {
                model.correct += 1;
            }

            results.push(RecordResult {
                video: pred.video.clone(),
                statement: pred.statement.clone(),
                ground_truth: entry.ground_truth.clone(),
                predicted,
                correct: is_correct,
                model: entry.model.clone(),
            });
        }

        Evaluation {
            correct,
            total,
            category_stats,
            model_stats,
            results,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}
