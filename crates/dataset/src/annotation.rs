use serde::{Deserialize, Serialize};

/// One annotated caption as produced by the labeling tool.
///
/// Fields are defaulted so partially-filled annotation exports still parse;
/// an item with no usable labels simply contributes nothing to the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedItem {
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub labels: Vec<LabelEntry>,
}

/// A single labeled statement within a caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEntry {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

pub(crate) fn default_model() -> String {
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let item: AnnotatedItem = serde_json::from_str(r#"{"video_url": "v.mp4"}"#).unwrap();

        assert_eq!(item.video_url, "v.mp4");
        assert_eq!(item.caption, "");
        assert_eq!(item.model, "unknown");
        assert!(item.labels.is_empty());
    }

    #[test]
    fn test_label_entry_defaults() {
        let entry: LabelEntry = serde_json::from_str(r#"{"text": "a statement"}"#).unwrap();

        assert_eq!(entry.text, "a statement");
        assert!(entry.labels.is_empty());
    }
}
