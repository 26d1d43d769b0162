use std::path::PathBuf;

use tracing::warn;

use crate::annotation::AnnotatedItem;
use crate::prompt::build_detection_prompt;
use crate::record::{ConversationTurn, DatasetRecord, GroundTruth};
use crate::videos::resolve_video;

pub struct DatasetBuilder {
    video_base: PathBuf,
    max_samples: Option<usize>,
}

impl DatasetBuilder {
    /// A non-positive cap means no cap.
    pub fn new(video_base: PathBuf, max_samples: Option<usize>) -> Self {
        Self {
            video_base,
            max_samples: max_samples.filter(|&cap| cap > 0),
        }
    }

    /// Convert annotated items into labeled records.
    ///
    /// Items whose video cannot be located are skipped whole, with a
    /// warning. Statements with empty text, no tags, or only tags outside
    /// the known label set are dropped silently.
    pub fn build(&self, items: &[AnnotatedItem]) -> Vec<DatasetRecord> {
        let mut dataset = Vec::new();

        for item in items {
            let video_path = match resolve_video(&self.video_base, &item.video_url) {
                Some(path) => path,
                None => {
                    warn!("Video not found: {}", item.video_url);
                    continue;
                }
            };
            let video = video_path.to_string_lossy().to_string();

            let mut sample_count = 0;
            for entry in &item.labels {
                let text = entry.text.trim();
                if text.is_empty() || entry.labels.is_empty() {
                    continue;
                }

                let ground_truth = match GroundTruth::from_tags(&entry.labels) {
                    Some(label) => label,
                    None => continue,
                };

                dataset.push(DatasetRecord {
                    video: video.clone(),
                    use_audio: true,
                    conversations: build_conversation(&item.caption, text, ground_truth),
                    video_id: item.id.clone(),
                    model: item.model.clone(),
                    statement: text.to_string(),
                    ground_truth,
                    original_labels: entry.labels.clone(),
                });

                sample_count += 1;
                if let Some(cap) = self.max_samples {
                    if sample_count >= cap {
                        break;
                    }
                }
            }
        }

        dataset
    }
}

/// Two-turn conversation: the detection prompt and the expected answer.
fn build_conversation(
    caption: &str,
    statement: &str,
    ground_truth: GroundTruth,
) -> Vec<ConversationTurn> {
    vec![
        ConversationTurn {
            from: "human".to_string(),
            value: build_detection_prompt(caption, statement),
        },
        ConversationTurn {
            from: "gpt".to_string(),
            value: ground_truth.as_str().to_string(),
        },
    ]
}
