use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::scoring::{CategoryCount, Evaluation, RecordResult};

/// Full evaluation report written when an output path is given.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    pub accuracy: f64,
    pub total: usize,
    pub correct: usize,
    pub category_stats: HashMap<String, CategoryCount>,
    pub model_stats: HashMap<String, CategoryCount>,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub detailed_results: Vec<RecordResult>,
}

impl EvalReport {
    pub fn from_evaluation(evaluation: Evaluation) -> Self {
        let accuracy = evaluation.accuracy();
        let metrics = evaluation.detection_metrics();

        Self {
            accuracy,
            total: evaluation.total,
            correct: evaluation.correct,
            category_stats: evaluation.category_stats,
            model_stats: evaluation.model_stats,
            precision: metrics.precision,
            recall: metrics.recall,
            f1: metrics.f1,
            detailed_results: evaluation.results,
        }
    }
}

/// Write the report as indented JSON, non-ASCII left unescaped.
pub fn write_report(path: &Path, report: &EvalReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).context(format!("Failed to write report: {:?}", path))?;
    Ok(())
}

/// Print the human-readable evaluation summary.
///
/// Category and model tables are sorted by name so output is stable across
/// runs regardless of map iteration order.
pub fn print_summary(evaluation: &Evaluation) {
    let metrics = evaluation.detection_metrics();

    println!("{}", "=".repeat(80));
    println!("HALLUCINATION DETECTION EVALUATION RESULTS");
    println!("{}", "=".repeat(80));
    println!(
        "\nOverall Accuracy: {:.4} ({}/{})",
        evaluation.accuracy(),
        evaluation.correct,
        evaluation.total
    );

    println!("\nPer-Category Performance:");
    println!("{}", "-".repeat(80));
    for (category, stats) in sorted_by_name(&evaluation.category_stats) {
        println!(
            "  {:<15}: {:.4} ({}/{})",
            capitalize(category),
            stats.accuracy(),
            stats.correct,
            stats.total
        );
    }

    println!("\nPer-Model Performance:");
    println!("{}", "-".repeat(80));
    for (model, stats) in sorted_by_name(&evaluation.model_stats) {
        println!(
            "  {:<20}: {:.4} ({}/{})",
            model,
            stats.accuracy(),
            stats.correct,
            stats.total
        );
    }

    println!("\nHallucination Detection Metrics:");
    println!("{}", "-".repeat(80));
    println!("  Precision: {:.4}", metrics.precision);
    println!("  Recall:    {:.4}", metrics.recall);
    println!("  F1 Score:  {:.4}", metrics.f1);
    println!("{}", "=".repeat(80));
}

fn sorted_by_name(stats: &HashMap<String, CategoryCount>) -> Vec<(&String, &CategoryCount)> {
    let mut entries: Vec<_> = stats.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
