use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use eval::{EvalReport, Scorer, load_dataset, load_predictions, print_summary, write_report};

#[derive(Parser)]
#[command(
    name = "evaluate",
    version,
    about = "Evaluate hallucination detection predictions against ground truth"
)]
struct Cli {
    /// Path to the dataset with ground truth
    #[arg(long, default_value = "data/hallucination_detection_dataset.json")]
    dataset: PathBuf,

    /// Path to the predictions file
    #[arg(long, default_value = "data/hallucination_detection_results.json")]
    predictions: PathBuf,

    /// Path to save detailed evaluation results
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if !cli.predictions.exists() {
        println!(
            "Error: Predictions file not found: {}",
            cli.predictions.display()
        );
        println!("\nPlease run the hallucination detection inference first.");
        return Ok(());
    }

    let records = load_dataset(&cli.dataset)?;
    let predictions = load_predictions(&cli.predictions)?;

    let evaluation = Scorer::new(&records).score(&predictions);
    print_summary(&evaluation);

    if let Some(output) = &cli.output {
        let report = EvalReport::from_evaluation(evaluation);
        write_report(output, &report)?;
        println!("\nDetailed results saved to: {}", output.display());
    }

    Ok(())
}
