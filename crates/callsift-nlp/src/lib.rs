//! Callsift Tokenizer Layer
//!
//! Pluggable tokenizer adapter implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `Tokenizer` trait from
//! `callsift-domain`. The extraction engine depends only on that trait, so
//! tokenizers can be swapped without touching the engine.
//!
//! # Tokenizers
//!
//! - `MockTokenizer`: deterministic mock for testing
//! - `HeuristicTokenizer`: dependency-free rule tokenizer with a
//!   right-neighbor head approximation
//!
//! # Examples
//!
//! ```
//! use callsift_nlp::HeuristicTokenizer;
//! use callsift_domain::traits::Tokenizer;
//!
//! let tokenizer = HeuristicTokenizer::new();
//! let tokens = tokenizer.tokenize("driven about 45000 km already").unwrap();
//! assert_eq!(tokens[2].text, "45000");
//! assert_eq!(tokens[2].head_text, "km");
//! ```

#![warn(missing_docs)]

pub mod heuristic;

use callsift_domain::traits::Tokenizer as TokenizerTrait;
use callsift_domain::Token;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use heuristic::HeuristicTokenizer;

/// Errors that can occur during tokenization
#[derive(Error, Debug)]
pub enum TokenizeError {
    /// Input the tokenizer cannot process
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Generic tokenizer fault
    #[error("tokenizer error: {0}")]
    Other(String),
}

/// Mock tokenizer for deterministic testing
///
/// Returns pre-configured token sequences without any analysis. Useful for
/// exercising the engine with exact head/numeric-flag combinations that a
/// heuristic tokenizer may not produce.
///
/// # Examples
///
/// ```
/// use callsift_nlp::MockTokenizer;
/// use callsift_domain::{Token, traits::Tokenizer};
///
/// let mut tokenizer = MockTokenizer::default();
/// tokenizer.add_response("45000 km", vec![
///     Token::with_numeric_flag("45000", true, "km"),
///     Token::with_numeric_flag("km", false, "km"),
/// ]);
/// let tokens = tokenizer.tokenize("45000 km").unwrap();
/// assert_eq!(tokens.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTokenizer {
    responses: Arc<Mutex<HashMap<String, Vec<Token>>>>,
    errors: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTokenizer {
    /// Create a new MockTokenizer with no configured responses.
    ///
    /// Unconfigured inputs fall back to whitespace splitting with each
    /// token heading itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token sequence returned for a given input text
    pub fn add_response(&mut self, text: impl Into<String>, tokens: Vec<Token>) {
        self.responses.lock().unwrap().insert(text.into(), tokens);
    }

    /// Configure an error for a given input text
    pub fn add_error(&mut self, text: impl Into<String>, diagnostic: impl Into<String>) {
        self.errors
            .lock()
            .unwrap()
            .insert(text.into(), diagnostic.into());
    }

    /// Get the number of times tokenize was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl TokenizerTrait for MockTokenizer {
    type Error = TokenizeError;

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(diagnostic) = self.errors.lock().unwrap().get(text) {
            return Err(TokenizeError::Other(diagnostic.clone()));
        }

        if let Some(tokens) = self.responses.lock().unwrap().get(text) {
            return Ok(tokens.clone());
        }

        // Fallback: naive whitespace split, each token its own head
        Ok(text
            .split_whitespace()
            .map(|word| Token::new(word, word))
            .collect())
    }
}
