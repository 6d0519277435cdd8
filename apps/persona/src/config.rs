use anyhow::{bail, Context, Result};

use crate::markers::{Delimiters, END_OF_PROMPT, END_OF_TEXT};

/// How the binary writes the generated prompt to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Binary configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_username: String,
    pub end_of_prompt: String,
    pub end_of_text: String,
    pub output_format: OutputFormat,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let marker = |key: &str, default: &str| -> Result<String> {
            match lookup(key) {
                Some(value) if value.is_empty() => {
                    bail!("Marker variable '{key}' must not be empty")
                }
                Some(value) => Ok(value),
                None => Ok(default.to_string()),
            }
        };

        let output_format = match lookup("PROMPT_FORMAT").as_deref() {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => bail!("PROMPT_FORMAT must be 'text' or 'json', got '{other}'"),
        };

        Ok(Config {
            bot_username: require("BOT_USERNAME")?,
            end_of_prompt: marker("END_OF_PROMPT", END_OF_PROMPT)?,
            end_of_text: marker("END_OF_TEXT", END_OF_TEXT)?,
            output_format,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn delimiters(&self) -> Delimiters {
        Delimiters::new(&self.end_of_prompt, &self.end_of_text)
    }
}
