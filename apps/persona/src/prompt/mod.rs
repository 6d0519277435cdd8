// Persona prompt: template text and the builder that renders it.

pub mod builder;
pub mod prompts;

pub use builder::{build_prompt, validate_username, PromptBuilder};
