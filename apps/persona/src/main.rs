use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use persona::config::{Config, OutputFormat};
use persona::{Delimiters, PromptBuilder};

/// JSON shape written when `PROMPT_FORMAT=json`.
#[derive(Debug, Serialize)]
struct PromptOutput<'a> {
    bot_username: &'a str,
    delimiters: &'a Delimiters,
    prompt: &'a str,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the prompt
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting persona prompt builder v{}", env!("CARGO_PKG_VERSION"));

    let builder = PromptBuilder::new(config.delimiters());
    let prompt = builder
        .build_checked(&config.bot_username)
        .context("Refusing to build persona prompt")?;
    info!(
        bot_username = %config.bot_username,
        prompt_len = prompt.len(),
        "Persona prompt ready"
    );

    let rendered = match config.output_format {
        OutputFormat::Text => prompt,
        OutputFormat::Json => serde_json::to_string_pretty(&PromptOutput {
            bot_username: &config.bot_username,
            delimiters: builder.delimiters(),
            prompt: &prompt,
        })?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
