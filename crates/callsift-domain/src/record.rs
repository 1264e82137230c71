//! Extraction record types: the structured output for one transcript

use crate::taxonomy::RequirementField;
use serde::{Deserialize, Serialize};

/// Customer requirements extracted from a transcript.
///
/// Every field is always present in serialized output; an unmatched field
/// serializes as `null` rather than a missing key, so consumers can rely on
/// a fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequirements {
    /// Body style of the requested car
    pub car_type: Option<String>,
    /// Requested fuel type
    pub fuel_type: Option<String>,
    /// Requested color
    pub color: Option<String>,
    /// Odometer reading, with unit (e.g. "45000 km")
    pub distance_travelled: Option<String>,
    /// Year of manufacture
    pub make_year: Option<String>,
    /// Requested transmission type
    pub transmission_type: Option<String>,
}

impl CustomerRequirements {
    /// Read a field by its schema key.
    pub fn get(&self, field: RequirementField) -> Option<&str> {
        match field {
            RequirementField::CarType => self.car_type.as_deref(),
            RequirementField::FuelType => self.fuel_type.as_deref(),
            RequirementField::Color => self.color.as_deref(),
            RequirementField::DistanceTravelled => self.distance_travelled.as_deref(),
            RequirementField::MakeYear => self.make_year.as_deref(),
            RequirementField::TransmissionType => self.transmission_type.as_deref(),
        }
    }

    /// Set a field by its schema key, replacing any earlier value.
    pub fn set(&mut self, field: RequirementField, value: String) {
        let slot = match field {
            RequirementField::CarType => &mut self.car_type,
            RequirementField::FuelType => &mut self.fuel_type,
            RequirementField::Color => &mut self.color,
            RequirementField::DistanceTravelled => &mut self.distance_travelled,
            RequirementField::MakeYear => &mut self.make_year,
            RequirementField::TransmissionType => &mut self.transmission_type,
        };
        *slot = Some(value);
    }

    /// Number of populated fields.
    pub fn populated_count(&self) -> usize {
        RequirementField::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }
}

/// Company-policy mentions detected in a transcript.
///
/// Each flag records whether the exact policy phrase occurred in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPolicies {
    /// "Free RC Transfer" was mentioned
    pub free_rc_transfer: bool,
    /// "5-Day Money Back Guarantee" was mentioned
    pub money_back_guarantee: bool,
    /// "Free RSA for One Year" was mentioned
    pub free_rsa: bool,
    /// "Return Policy" was mentioned
    pub return_policy: bool,
}

/// Customer objections detected in a transcript.
///
/// The checks are independent; a transcript may raise several objections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerObjections {
    /// Concerns about refurbishment quality
    pub refurbishment_quality: bool,
    /// Concerns about issues with the car itself
    pub car_issues: bool,
    /// Concerns about pricing
    pub price_issues: bool,
    /// Concerns about the sales experience (wait time, staff behavior, ...)
    pub experience_issues: bool,
}

/// The structured record produced for one transcript.
///
/// A pure value with no further lifecycle: processing the same transcript
/// with the same taxonomies always yields an identical record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Extracted customer requirements
    pub customer_requirements: CustomerRequirements,
    /// Detected company-policy mentions
    pub company_policies: CompanyPolicies,
    /// Detected customer objections
    pub customer_objections: CustomerObjections,
    /// Coverage accuracy in [0, 100]: the fraction of requirement fields
    /// that were populated. This rewards population, not verified
    /// correctness against ground truth.
    pub accuracy: f64,
}
