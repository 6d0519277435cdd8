//! Prompt Template Builder — renders the persona template for a bot username.
//!
//! The username is interpolated verbatim. `build` never fails and does not
//! guard against usernames that contain the delimiters; a downstream
//! transcript parser may then mis-split turns. Callers that take usernames
//! from untrusted input should go through `build_checked`.

use tracing::debug;

use crate::errors::PromptError;
use crate::markers::Delimiters;
use crate::prompt::prompts::{
    BOT_USERNAME, END_OF_PROMPT, END_OF_TEXT, PERSONA_PROMPT_TEMPLATE,
};

/// Builds the persona prompt with the default delimiters.
pub fn build_prompt(bot_username: &str) -> String {
    PromptBuilder::default().build(bot_username)
}

/// Renders the persona template against an injected set of delimiters.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    delimiters: Delimiters,
}

impl PromptBuilder {
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn build(&self, bot_username: &str) -> String {
        let prompt = render(PERSONA_PROMPT_TEMPLATE, |name| match name {
            BOT_USERNAME => Some(bot_username),
            END_OF_PROMPT => Some(self.delimiters.end_of_prompt.as_str()),
            END_OF_TEXT => Some(self.delimiters.end_of_text.as_str()),
            _ => None,
        });
        debug!(
            username_len = bot_username.len(),
            prompt_len = prompt.len(),
            "Built persona prompt"
        );
        prompt
    }

    /// Like `build`, but refuses usernames that would corrupt the transcript framing.
    pub fn build_checked(&self, bot_username: &str) -> Result<String, PromptError> {
        validate_username(&self.delimiters, bot_username)?;
        Ok(self.build(bot_username))
    }
}

/// Rejects empty, multi-line, or delimiter-bearing usernames.
pub fn validate_username(delimiters: &Delimiters, bot_username: &str) -> Result<(), PromptError> {
    if bot_username.trim().is_empty() {
        return Err(PromptError::EmptyUsername);
    }
    if bot_username.contains(['\n', '\r']) {
        return Err(PromptError::ContainsLineBreak);
    }
    if let Some(marker) = delimiters.find_in(bot_username) {
        return Err(PromptError::ContainsMarker {
            marker: marker.to_string(),
        });
    }
    Ok(())
}

/// Single-pass placeholder substitution. Substituted values are never
/// rescanned, so a username such as `{end_of_text}` stays literal.
/// Unknown `{...}` sequences are copied through unchanged.
fn render<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}').and_then(|close| Some((close, lookup(&after[..close])?))) {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
