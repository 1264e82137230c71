//! Field classification rules
//!
//! Each requirement field is recognized by a tagged-variant rule. The rules
//! are held in an explicit priority list: per token, the first rule that
//! matches wins and later rules are not consulted for that token.

use crate::config::EngineConfig;
use callsift_domain::{RequirementField, Taxonomy, Token};

/// Make-year window bounds, both exclusive ("1991".."2024" accepted).
const YEAR_AFTER: u32 = 1990;
const YEAR_BEFORE: u32 = 2025;

/// A single token-classification rule for one requirement field.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Case-insensitive membership in a fixed vocabulary
    Membership(Taxonomy),

    /// A numeric literal whose head text mentions a unit; the extracted
    /// value is the token text with the unit appended
    UnitDistance {
        /// Field the rule populates
        field: RequirementField,
        /// Unit substring looked for in the case-folded head text
        unit: &'static str,
    },

    /// A digit-only token whose integer value lies strictly inside a window
    YearWindow {
        /// Field the rule populates
        field: RequirementField,
        /// Exclusive lower bound
        after: u32,
        /// Exclusive upper bound
        before: u32,
    },
}

impl FieldRule {
    /// The field this rule populates.
    pub fn field(&self) -> RequirementField {
        match self {
            FieldRule::Membership(taxonomy) => taxonomy.field(),
            FieldRule::UnitDistance { field, .. } => *field,
            FieldRule::YearWindow { field, .. } => *field,
        }
    }

    /// Test the rule against one token, returning the value to record.
    ///
    /// Matched values keep the token's original-case surface text.
    pub fn matches(&self, token: &Token) -> Option<String> {
        match self {
            FieldRule::Membership(taxonomy) => {
                taxonomy.contains(&token.text).then(|| token.text.clone())
            }
            FieldRule::UnitDistance { unit, .. } => {
                let head_mentions_unit = token.head_text.to_lowercase().contains(unit);
                (token.is_numeric_literal && head_mentions_unit)
                    .then(|| format!("{} {}", token.text, unit))
            }
            FieldRule::YearWindow { after, before, .. } => {
                if !token.is_digits() {
                    return None;
                }
                let year: u32 = token.text.parse().ok()?;
                (year > *after && year < *before).then(|| token.text.clone())
            }
        }
    }
}

/// Build the priority-ordered rule list from configuration.
///
/// The order is part of the extraction contract: car type is tested before
/// fuel type, distance before year, transmission last.
pub(crate) fn priority_rules(config: &EngineConfig) -> Vec<FieldRule> {
    vec![
        FieldRule::Membership(Taxonomy::new(RequirementField::CarType, &config.car_types)),
        FieldRule::Membership(Taxonomy::new(RequirementField::FuelType, &config.fuel_types)),
        FieldRule::UnitDistance {
            field: RequirementField::DistanceTravelled,
            unit: "km",
        },
        FieldRule::YearWindow {
            field: RequirementField::MakeYear,
            after: YEAR_AFTER,
            before: YEAR_BEFORE,
        },
        FieldRule::Membership(Taxonomy::new(
            RequirementField::TransmissionType,
            &config.transmission_types,
        )),
    ]
}
