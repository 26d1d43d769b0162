/// Build the human turn asking the model to judge one statement.
///
/// The wording and the 'accurate' / 'hallucination' answer space are fixed;
/// downstream inference and scoring both depend on this exact phrasing.
pub fn build_detection_prompt(caption: &str, statement: &str) -> String {
    format!(
        r#"<video>
Here is a caption describing this video:

{}

Now, please determine whether the following statement is accurate or a hallucination based on what you see and hear in the video:

Statement: "{}"

Is this statement accurate or a hallucination? Please answer with either 'accurate' or 'hallucination'."#,
        caption, statement
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_caption_and_statement() {
        let prompt = build_detection_prompt("A dog barks.", "The dog is silent.");

        assert!(prompt.starts_with("<video>\n"));
        assert!(prompt.contains("A dog barks."));
        assert!(prompt.contains("Statement: \"The dog is silent.\""));
        assert!(prompt.ends_with(
            "Please answer with either 'accurate' or 'hallucination'."
        ));
    }
}
