use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use dataset::{DatasetBuilder, GroundTruth, load_annotations, write_dataset};

#[derive(Parser)]
#[command(
    name = "build_dataset",
    version,
    about = "Create a hallucination detection dataset from annotated captions"
)]
struct Cli {
    /// Path to annotated_captions.json
    #[arg(long = "annotated_captions", default_value = "data/annotated_captions.json")]
    annotated_captions: PathBuf,

    /// Base path where video files are located
    #[arg(long = "video_base_path", default_value = "data/videos")]
    video_base_path: PathBuf,

    /// Output path for the generated dataset
    #[arg(long, default_value = "data/hallucination_detection_dataset.json")]
    output: PathBuf,

    /// Maximum number of samples per video (default: all)
    #[arg(long = "max_samples")]
    max_samples: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let items = load_annotations(&cli.annotated_captions)?;
    let builder = DatasetBuilder::new(cli.video_base_path, cli.max_samples);
    let records = builder.build(&items);

    write_dataset(&cli.output, &records)?;

    println!(
        "Created hallucination detection dataset with {} samples",
        records.len()
    );
    println!("Saved to: {}", cli.output.display());

    let accurate = records
        .iter()
        .filter(|r| r.ground_truth == GroundTruth::Accurate)
        .count();
    let hallucination = records.len() - accurate;

    println!("\nStatistics:");
    println!("  Accurate: {}", accurate);
    println!("  Hallucination: {}", hallucination);

    Ok(())
}
