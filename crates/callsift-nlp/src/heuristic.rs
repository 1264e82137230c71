//! Dependency-free heuristic tokenizer

use crate::TokenizeError;
use callsift_domain::traits::Tokenizer;
use callsift_domain::Token;

/// Rule-based tokenizer with a right-neighbor head approximation.
///
/// Words are split on whitespace and stripped of surrounding punctuation.
/// The syntactic head of each token is approximated by its right neighbor;
/// the final token heads itself. In transcript phrasing a quantity is
/// followed by its unit ("driven 45000 km"), so the approximation is enough
/// for the unit-adjacency rules the engine applies. It is not a parse.
#[derive(Debug, Clone, Default)]
pub struct HeuristicTokenizer;

impl HeuristicTokenizer {
    /// Create a new heuristic tokenizer.
    pub fn new() -> Self {
        Self
    }

    fn split_words(text: &str) -> Vec<&str> {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty())
            .collect()
    }
}

impl Tokenizer for HeuristicTokenizer {
    type Error = TokenizeError;

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        let words = Self::split_words(text);

        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let head = words.get(i + 1).copied().unwrap_or(word);
                Token::new(*word, head)
            })
            .collect();

        Ok(tokens)
    }
}
