//! Callsift Engine
//!
//! Converts free-form sales-call transcripts into structured, auditable
//! records: customer requirements, company-policy mentions, customer
//! objections, and a coverage-accuracy score.
//!
//! # Overview
//!
//! Extraction is a deterministic, rule-based classification over fixed
//! vocabularies — no statistical inference. Each requirement field is
//! recognized by a tagged-variant rule (taxonomy membership, unit-adjacent
//! number, year window) evaluated in an explicit priority list, so the match
//! order is data rather than incidental control flow.
//!
//! # Architecture
//!
//! ```text
//! Text → Tokenizer → Field rules ┐
//! Text → Policy phrases         ├→ CallRecord
//! Text → Objection keywords     ┘
//! ```
//!
//! The engine holds only immutable state after construction: taxonomy
//! configuration is validated once in [`Engine::new`] and shared read-only,
//! so concurrent `process` calls need no coordination.
//!
//! # Example Usage
//!
//! ```
//! use callsift_engine::{Engine, EngineConfig};
//! use callsift_nlp::HeuristicTokenizer;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Engine::new(HeuristicTokenizer::new(), EngineConfig::default())?;
//!
//! let record = engine.process("I want a Red hatchback, diesel, automatic")?;
//!
//! assert_eq!(record.customer_requirements.car_type.as_deref(), Some("hatchback"));
//! assert_eq!(record.customer_requirements.color.as_deref(), Some("Red"));
//! println!("coverage accuracy: {}", record.accuracy);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod fields;
mod objections;
mod policies;
mod rules;
mod scoring;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{ConfigurationError, ExtractionError};
pub use rules::FieldRule;
