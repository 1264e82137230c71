//! Callsift CLI library
//!
//! Command handling for the `callsift` binary: read a transcript from a file
//! or stdin, run the extraction engine, and render the structured record.

pub mod cli;
pub mod output;

use anyhow::Context;
use callsift_engine::{Engine, EngineConfig};
use callsift_nlp::HeuristicTokenizer;
use std::io::Read;

pub use cli::Cli;
pub use output::OutputFormat;

/// Execute the CLI: process one transcript and return the rendered output.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.taxonomy {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read taxonomy file {}", path.display()))?;
            EngineConfig::from_toml(&toml_str)
                .with_context(|| format!("invalid taxonomy file {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    let engine = Engine::new(HeuristicTokenizer::new(), config)
        .context("failed to construct extraction engine")?;

    let transcript = read_transcript(cli)?;
    let record = engine
        .process(&transcript)
        .context("transcript extraction failed")?;

    output::render(&record, cli.format)
}

fn read_transcript(cli: &Cli) -> anyhow::Result<String> {
    match &cli.transcript {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read transcript from stdin")?;
            Ok(text)
        }
    }
}
