use thiserror::Error;

/// Reasons a bot username is refused by the checked build path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("Bot username must not be empty")]
    EmptyUsername,

    #[error("Bot username contains the transcript delimiter {marker:?}")]
    ContainsMarker { marker: String },

    #[error("Bot username must be a single line")]
    ContainsLineBreak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_marker_message_names_marker() {
        let err = PromptError::ContainsMarker {
            marker: "<|endoftext|>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bot username contains the transcript delimiter \"<|endoftext|>\""
        );
    }
}
