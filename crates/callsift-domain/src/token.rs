//! Lexical token module

/// A lexical unit of transcript text, as produced by a tokenizer adapter.
///
/// The engine depends only on this minimal contract: the surface text, a
/// numeric-literal flag, and the surface text of the syntactic head (the
/// governing token, used for local context rules such as a number whose head
/// mentions a distance unit). Any tokenizer exposing these three pieces is
/// substitutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Original-case surface text of the token
    pub text: String,
    /// Whether the tokenizer considers this token a numeric literal
    pub is_numeric_literal: bool,
    /// Surface text of the token's syntactic head
    pub head_text: String,
}

impl Token {
    /// Create a token, inferring the numeric-literal flag from the text.
    ///
    /// A token counts as a numeric literal when its text is non-empty and,
    /// after dropping digit-group commas, consists only of decimal digits.
    pub fn new(text: impl Into<String>, head_text: impl Into<String>) -> Self {
        let text = text.into();
        let is_numeric_literal = Self::looks_numeric(&text);
        Self {
            text,
            is_numeric_literal,
            head_text: head_text.into(),
        }
    }

    /// Create a token with an explicit numeric-literal flag.
    pub fn with_numeric_flag(
        text: impl Into<String>,
        is_numeric_literal: bool,
        head_text: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            is_numeric_literal,
            head_text: head_text.into(),
        }
    }

    /// Whether the token's surface text consists only of decimal digits.
    ///
    /// Stricter than `is_numeric_literal`: "45,000" is a numeric literal but
    /// is not digit-only. Used by rules that parse the text as an integer.
    pub fn is_digits(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c.is_ascii_digit())
    }

    fn looks_numeric(text: &str) -> bool {
        let mut saw_digit = false;
        for c in text.chars() {
            if c.is_ascii_digit() {
                saw_digit = true;
            } else if c != ',' {
                return false;
            }
        }
        saw_digit
    }
}
