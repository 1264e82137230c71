//! Callsift Domain Layer
//!
//! This crate contains the core data model for Callsift. It defines the
//! fundamental value objects (tokens, taxonomies, extraction records) and the
//! trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Token**: a lexical unit with a surface form, a numeric-literal flag,
//!   and the surface form of its syntactic head
//! - **Taxonomy**: a fixed, named set of recognized values used to classify
//!   a token into a requirement field
//! - **CallRecord**: the structured output for one transcript — requirements,
//!   policy mentions, objections, and a coverage-accuracy score
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Pure data model only, no extraction logic
//! - Infrastructure implementations (tokenizers) live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod taxonomy;
pub mod token;
pub mod traits;

// Re-exports for convenience
pub use record::{CallRecord, CompanyPolicies, CustomerObjections, CustomerRequirements};
pub use taxonomy::{RequirementField, Taxonomy};
pub use token::Token;
