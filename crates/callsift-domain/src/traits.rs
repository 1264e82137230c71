//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the domain model and
//! infrastructure. Implementations live in other crates.

use crate::Token;

/// Trait for turning raw transcript text into a token sequence
///
/// Implemented by the infrastructure layer (callsift-nlp). The engine
/// requires only the minimal token contract — surface text, numeric-literal
/// flag, head text — so any tokenizer exposing it is substitutable.
pub trait Tokenizer {
    /// Error type for tokenizer operations
    type Error;

    /// Tokenize raw text into an ordered token sequence
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error>;
}
