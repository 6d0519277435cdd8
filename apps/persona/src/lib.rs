//! Builds the system prompt for a Discord chat-bot persona.

pub mod config;
pub mod errors;
pub mod markers;
pub mod prompt;

pub use errors::PromptError;
pub use markers::Delimiters;
pub use prompt::{build_prompt, validate_username, PromptBuilder};
