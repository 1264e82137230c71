//! Taxonomy configuration for the extraction engine

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Vocabularies the engine classifies tokens against.
///
/// The defaults match the vocabularies the extraction was designed around;
/// deployments can extend them from a TOML file without recompiling. Only
/// the token-classifying taxonomies and the color list are configurable —
/// policy and objection phrases are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Recognized car body styles
    pub car_types: Vec<String>,

    /// Recognized fuel types
    pub fuel_types: Vec<String>,

    /// Recognized transmission types
    pub transmission_types: Vec<String>,

    /// Recognized color names, matched as whole words in the raw text
    pub colors: Vec<String>,
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// Every taxonomy must carry at least one value; an empty list would
    /// silently disable its field, which is a configuration mistake rather
    /// than a legitimate vocabulary.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.car_types.is_empty() {
            return Err(ConfigurationError::EmptyTaxonomy("car_types"));
        }
        if self.fuel_types.is_empty() {
            return Err(ConfigurationError::EmptyTaxonomy("fuel_types"));
        }
        if self.transmission_types.is_empty() {
            return Err(ConfigurationError::EmptyTaxonomy("transmission_types"));
        }
        if self.colors.is_empty() {
            return Err(ConfigurationError::EmptyTaxonomy("colors"));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(toml_str).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string_pretty(self).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            car_types: strings(&["hatchback", "suv", "sedan"]),
            fuel_types: strings(&["petrol", "diesel", "electric", "hybrid"]),
            transmission_types: strings(&["manual", "automatic"]),
            colors: strings(&[
                "red", "blue", "green", "black", "white", "silver", "grey", "yellow", "orange",
                "brown",
            ]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
