//! Error types for the extraction engine

use thiserror::Error;

/// Errors detected when constructing an engine from configuration.
///
/// Configuration is validated once, at construction, so per-transcript
/// extraction carries no configuration-validation branching.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// A required taxonomy has no recognized values
    #[error("taxonomy `{0}` must list at least one recognized value")]
    EmptyTaxonomy(&'static str),

    /// The color list produced an uncompilable pattern
    #[error("invalid color pattern: {0}")]
    ColorPattern(String),

    /// Configuration file could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Errors that can occur while processing a transcript.
///
/// Extraction is a pure computation over already-available input, so
/// failures are non-transient and never retried.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The tokenizer adapter failed; carries its diagnostic
    #[error("tokenizer failure: {0}")]
    Tokenizer(String),
}
