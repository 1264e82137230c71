//! CLI argument definitions and parsing.

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Callsift - extract structured records from sales-call transcripts.
#[derive(Debug, Parser)]
#[command(name = "callsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Transcript file to process (reads stdin when omitted)
    pub transcript: Option<PathBuf>,

    /// Taxonomy configuration file (TOML); built-in vocabularies when omitted
    #[arg(short, long)]
    pub taxonomy: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}
