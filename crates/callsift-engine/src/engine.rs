//! Extraction orchestrator

use crate::config::EngineConfig;
use crate::error::{ConfigurationError, ExtractionError};
use crate::fields::{ColorMatcher, FieldExtractor};
use crate::rules::priority_rules;
use crate::{objections, policies, scoring};
use callsift_domain::traits::Tokenizer;
use callsift_domain::CallRecord;
use std::fmt;
use tracing::{debug, info};

/// The extraction engine: turns one transcript into one [`CallRecord`].
///
/// All state is immutable after construction, so a single engine can serve
/// any number of concurrent `process` calls without locking — it is `Send`
/// and `Sync` whenever its tokenizer is.
pub struct Engine<T: Tokenizer> {
    tokenizer: T,
    fields: FieldExtractor,
}

impl<T> Engine<T>
where
    T: Tokenizer,
    T::Error: fmt::Display,
{
    /// Create an engine from a tokenizer and taxonomy configuration.
    ///
    /// Configuration is validated here, never at `process` time: a missing
    /// or empty taxonomy fails fast with a [`ConfigurationError`].
    pub fn new(tokenizer: T, config: EngineConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let rules = priority_rules(&config);
        let color = ColorMatcher::new(&config.colors)?;

        Ok(Self {
            tokenizer,
            fields: FieldExtractor::new(rules, color),
        })
    }

    /// Process one transcript into a structured record.
    ///
    /// Pure and deterministic: repeated calls on the same input return
    /// identical records. Empty or whitespace-only text is not an error; it
    /// yields an all-absent record with accuracy 0. A tokenizer fault is
    /// propagated as [`ExtractionError::Tokenizer`] with the adapter's
    /// diagnostic — tokenization is a precondition for field extraction, so
    /// there is no partial recovery.
    pub fn process(&self, raw_text: &str) -> Result<CallRecord, ExtractionError> {
        let tokens = self
            .tokenizer
            .tokenize(raw_text)
            .map_err(|e| ExtractionError::Tokenizer(e.to_string()))?;

        debug!("Tokenized transcript into {} tokens", tokens.len());

        let customer_requirements = self.fields.extract(&tokens, raw_text);
        let company_policies = policies::extract(raw_text);
        let customer_objections = objections::extract(raw_text);
        let accuracy = scoring::coverage(&customer_requirements);

        info!(
            "Extraction complete: {}/{} requirement fields populated, accuracy {:.2}",
            customer_requirements.populated_count(),
            callsift_domain::RequirementField::COUNT,
            accuracy
        );

        Ok(CallRecord {
            customer_requirements,
            company_policies,
            customer_objections,
            accuracy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsift_nlp::{HeuristicTokenizer, MockTokenizer};

    #[test]
    fn test_empty_text_is_not_an_error() {
        let engine = Engine::new(HeuristicTokenizer::new(), EngineConfig::default()).unwrap();
        let record = engine.process("").unwrap();

        assert_eq!(record.customer_requirements.populated_count(), 0);
        assert_eq!(record.accuracy, 0.0);
    }

    #[test]
    fn test_tokenizer_failure_is_propagated() {
        let mut tokenizer = MockTokenizer::new();
        tokenizer.add_error("garbled", "unreadable byte sequence");

        let engine = Engine::new(tokenizer, EngineConfig::default()).unwrap();
        let err = engine.process("garbled").unwrap_err();

        match err {
            ExtractionError::Tokenizer(diagnostic) => {
                assert!(diagnostic.contains("unreadable byte sequence"));
            }
        }
    }

    #[test]
    fn test_construction_rejects_bad_config() {
        let mut config = EngineConfig::default();
        config.car_types.clear();

        let result = Engine::new(HeuristicTokenizer::new(), config);
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyTaxonomy("car_types"))
        ));
    }
}
