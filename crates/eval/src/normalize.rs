/// Keywords that map a reply to the hallucination class.
const HALLUCINATION_KEYWORDS: [&str; 5] =
    ["hallucination", "illusion", "inaccurate", "false", "incorrect"];

/// Keywords that map a reply to the accurate class.
const ACCURATE_KEYWORDS: [&str; 4] = ["accurate", "correct", "true", "valid"];

/// Normalize a free-text predicted label to one of the two classes.
///
/// Matching is substring containment over the lowercased, trimmed reply.
/// Hallucination keywords are checked first: "inaccurate" contains
/// "accurate" and must not fall through to the accurate branch. Replies
/// matching neither list are returned as-is and will never equal a ground
/// truth label.
pub fn normalize_label(text: &str) -> String {
    let text = text.to_lowercase();
    let text = text.trim();

    if HALLUCINATION_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return "hallucination".to_string();
    }

    if ACCURATE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return "accurate".to_string();
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hallucination_keywords() {
        assert_eq!(normalize_label("It's False!"), "hallucination");
        assert_eq!(normalize_label("Illusion detected"), "hallucination");
        assert_eq!(normalize_label("that is incorrect."), "hallucination");
    }

    #[test]
    fn test_accurate_keywords() {
        assert_eq!(normalize_label("Looks Accurate"), "accurate");
        assert_eq!(normalize_label("TRUE"), "accurate");
        assert_eq!(normalize_label("the statement is valid"), "accurate");
    }

    #[test]
    fn test_inaccurate_is_hallucination() {
        // Substring precedence: "inaccurate" contains "accurate"
        assert_eq!(normalize_label("Inaccurate"), "hallucination");
    }

    #[test]
    fn test_unmatched_text_passes_through() {
        assert_eq!(normalize_label("maybe"), "maybe");
        assert_eq!(normalize_label("  Maybe  "), "maybe");
        assert_eq!(normalize_label(""), "");
    }
}
