//! Transcript delimiters shared by the prompt template and whatever parses the
//! model's output downstream.

use serde::{Deserialize, Serialize};

/// Separates a user's message from the bot's expected response.
pub const END_OF_PROMPT: &str = "<|endofprompt|>";

/// Separates one complete response from the next conversation turn.
pub const END_OF_TEXT: &str = "<|endoftext|>";

/// The pair of delimiters injected into the persona template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub end_of_prompt: String,
    pub end_of_text: String,
}

impl Delimiters {
    pub fn new(end_of_prompt: impl Into<String>, end_of_text: impl Into<String>) -> Self {
        Self {
            end_of_prompt: end_of_prompt.into(),
            end_of_text: end_of_text.into(),
        }
    }

    /// Returns the first delimiter that occurs inside `text`, if any.
    pub fn find_in<'a>(&'a self, text: &str) -> Option<&'a str> {
        [self.end_of_prompt.as_str(), self.end_of_text.as_str()]
            .into_iter()
            .find(|marker| !marker.is_empty() && text.contains(*marker))
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(END_OF_PROMPT, END_OF_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_global_markers() {
        let d = Delimiters::default();
        assert_eq!(d.end_of_prompt, END_OF_PROMPT);
        assert_eq!(d.end_of_text, END_OF_TEXT);
    }

    #[test]
    fn test_markers_are_distinct() {
        assert_ne!(END_OF_PROMPT, END_OF_TEXT);
        assert!(!END_OF_PROMPT.contains(END_OF_TEXT));
        assert!(!END_OF_TEXT.contains(END_OF_PROMPT));
    }

    #[test]
    fn test_find_in_detects_either_marker() {
        let d = Delimiters::default();
        assert_eq!(d.find_in("bot<|endofprompt|>"), Some(END_OF_PROMPT));
        assert_eq!(d.find_in("<|endoftext|>bot"), Some(END_OF_TEXT));
        assert_eq!(d.find_in("Zippy"), None);
    }

    #[test]
    fn test_find_in_ignores_empty_marker() {
        let d = Delimiters::new("", "###");
        assert_eq!(d.find_in("Zippy"), None);
        assert_eq!(d.find_in("Zip###py"), Some("###"));
    }

    #[test]
    fn test_delimiters_deserialize_from_json() {
        let json = r#"{"end_of_prompt": "<EOP>", "end_of_text": "<EOT>"}"#;
        let d: Delimiters = serde_json::from_str(json).unwrap();
        assert_eq!(d, Delimiters::new("<EOP>", "<EOT>"));
    }
}
