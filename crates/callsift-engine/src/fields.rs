//! Field extraction: token classification plus the raw-text color matcher

use crate::error::ConfigurationError;
use crate::rules::FieldRule;
use callsift_domain::{CustomerRequirements, RequirementField, Token};
use regex::{Regex, RegexBuilder};
use tracing::trace;

/// Populates a [`CustomerRequirements`] record from a token sequence.
///
/// One left-to-right pass; per token the priority rules are tested in order
/// and the first match wins. Across tokens the last writer wins: a later
/// mention of the same field silently replaces the earlier one. Color is
/// resolved independently of tokenization with a whole-word regex search
/// over the raw text.
#[derive(Debug)]
pub(crate) struct FieldExtractor {
    rules: Vec<FieldRule>,
    color: ColorMatcher,
}

impl FieldExtractor {
    pub(crate) fn new(rules: Vec<FieldRule>, color: ColorMatcher) -> Self {
        Self { rules, color }
    }

    pub(crate) fn extract(&self, tokens: &[Token], raw_text: &str) -> CustomerRequirements {
        let mut requirements = CustomerRequirements::default();

        for token in tokens {
            for rule in &self.rules {
                if let Some(value) = rule.matches(token) {
                    trace!("token '{}' matched field {}", token.text, rule.field());
                    requirements.set(rule.field(), value);
                    break;
                }
            }
        }

        if let Some(color) = self.color.first_match(raw_text) {
            requirements.set(RequirementField::Color, color);
        }

        requirements
    }
}

/// Case-insensitive whole-word matcher over the configured color names.
///
/// Compiled once at engine construction; the first match in document order
/// wins and keeps its original case.
#[derive(Debug)]
pub(crate) struct ColorMatcher {
    pattern: Regex,
}

impl ColorMatcher {
    pub(crate) fn new(colors: &[String]) -> Result<Self, ConfigurationError> {
        let alternation = colors
            .iter()
            .map(|color| regex::escape(color))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigurationError::ColorPattern(e.to_string()))?;

        Ok(Self { pattern })
    }

    pub(crate) fn first_match(&self, text: &str) -> Option<String> {
        self.pattern.find(text).map(|m| m.as_str().to_string())
    }
}
