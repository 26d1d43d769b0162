use serde::{Deserialize, Serialize};

/// Tags that mark a statement as a hallucination.
const HALLUCINATION_TAGS: [&str; 2] = ["Illusion", "Inaccurate"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroundTruth {
    Accurate,
    Hallucination,
}

impl GroundTruth {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroundTruth::Accurate => "accurate",
            GroundTruth::Hallucination => "hallucination",
        }
    }

    /// Classify a statement from its annotation tags.
    ///
    /// A hallucination tag wins even when "Accurate" is also present.
    /// Statements carrying neither kind of tag are unusable and return None.
    pub fn from_tags(tags: &[String]) -> Option<Self> {
        let is_hallucination = tags
            .iter()
            .any(|tag| HALLUCINATION_TAGS.contains(&tag.as_str()));
        let is_accurate = tags.iter().any(|tag| tag == "Accurate");

        if is_hallucination {
            Some(GroundTruth::Hallucination)
        } else if is_accurate {
            Some(GroundTruth::Accurate)
        } else {
            None
        }
    }
}

/// One turn of the training conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub from: String,
    pub value: String,
}

/// A labeled example in the emitted dataset.
///
/// `video` always points at a file that existed when the dataset was built.
/// Only `ground_truth` is required when reading the dataset back; the
/// evaluator accepts records reduced to the fields it joins on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub use_audio: bool,
    #[serde(default)]
    pub conversations: Vec<ConversationTurn>,
    #[serde(default)]
    pub video_id: String,
    #[serde(default = "crate::annotation::default_model")]
    pub model: String,
    #[serde(default)]
    pub statement: String,
    pub ground_truth: GroundTruth,
    #[serde(default)]
    pub original_labels: Vec<String>,
}
