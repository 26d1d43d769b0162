pub mod annotation;
pub mod builder;
pub mod prompt;
pub mod record;
pub mod videos;

pub use annotation::{AnnotatedItem, LabelEntry};
pub use builder::DatasetBuilder;
pub use record::{ConversationTurn, DatasetRecord, GroundTruth};
pub use videos::resolve_video;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load annotated captions from a JSON file.
pub fn load_annotations(path: &Path) -> Result<Vec<AnnotatedItem>> {
    let raw = fs::read_to_string(path)
        .context(format!("Failed to read annotated captions: {:?}", path))?;
    let items = serde_json::from_str(&raw)
        .context(format!("Failed to parse annotated captions: {:?}", path))?;
    Ok(items)
}

/// Write the dataset as indented JSON, non-ASCII left unescaped.
pub fn write_dataset(path: &Path, records: &[DatasetRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).context(format!("Failed to write dataset: {:?}", path))?;
    Ok(())
}
