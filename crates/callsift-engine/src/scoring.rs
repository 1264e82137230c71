//! Coverage scoring
//!
//! The accuracy figure is a coverage ratio — the fraction of requirement
//! fields that were populated — not a correctness measure against ground
//! truth. Callers surfacing it externally should say so.

use callsift_domain::{CustomerRequirements, RequirementField};

/// Score a requirements record: `100 * populated / schema size`, rounded to
/// two decimal places.
pub(crate) fn coverage(requirements: &CustomerRequirements) -> f64 {
    ratio(requirements.populated_count(), RequirementField::COUNT)
}

fn ratio(populated: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = populated as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
