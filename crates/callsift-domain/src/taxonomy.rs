//! Taxonomy module: fixed vocabularies for token classification

use std::collections::HashSet;
use std::fmt;

/// The fixed set of customer-requirement fields.
///
/// The schema is closed: every extraction produces exactly these six fields,
/// populated or not, so downstream consumers can rely on a stable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementField {
    /// Body style of the car (hatchback, suv, ...)
    CarType,
    /// Fuel type (petrol, diesel, ...)
    FuelType,
    /// Requested color
    Color,
    /// Odometer reading, with unit
    DistanceTravelled,
    /// Year of manufacture
    MakeYear,
    /// Transmission type (manual, automatic)
    TransmissionType,
}

impl RequirementField {
    /// All requirement fields, in schema order.
    pub const ALL: [RequirementField; 6] = [
        RequirementField::CarType,
        RequirementField::FuelType,
        RequirementField::Color,
        RequirementField::DistanceTravelled,
        RequirementField::MakeYear,
        RequirementField::TransmissionType,
    ];

    /// Number of fields in the requirements schema.
    pub const COUNT: usize = Self::ALL.len();

    /// The field's key in the serialized output schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementField::CarType => "car_type",
            RequirementField::FuelType => "fuel_type",
            RequirementField::Color => "color",
            RequirementField::DistanceTravelled => "distance_travelled",
            RequirementField::MakeYear => "make_year",
            RequirementField::TransmissionType => "transmission_type",
        }
    }
}

impl fmt::Display for RequirementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed, named set of recognized values for one requirement field.
///
/// Membership is case-insensitive; values are folded to lowercase once at
/// construction. Taxonomies are immutable after construction and safe to
/// share read-only across concurrent extraction calls.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    field: RequirementField,
    values: HashSet<String>,
}

impl Taxonomy {
    /// Create a taxonomy for the given field from an iterator of values.
    pub fn new<I, S>(field: RequirementField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .map(|v| v.as_ref().to_lowercase())
            .collect();
        Self { field, values }
    }

    /// The field this taxonomy classifies tokens into.
    pub fn field(&self) -> RequirementField {
        self.field
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, text: &str) -> bool {
        self.values.contains(&text.to_lowercase())
    }

    /// Number of recognized values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the taxonomy has no recognized values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
