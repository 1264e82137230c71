//! Output rendering for the CLI.

use anyhow::Context;
use callsift_domain::{CallRecord, RequirementField};
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON matching the output schema
    Json,
    /// Human-readable summary
    Summary,
}

/// Render a call record in the requested format.
pub fn render(record: &CallRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(record).context("failed to serialize record")
        }
        OutputFormat::Summary => Ok(render_summary(record)),
    }
}

fn render_summary(record: &CallRecord) -> String {
    let mut out = String::new();

    // Coverage of requirement fields, not correctness against ground truth
    let _ = writeln!(out, "Coverage accuracy: {:.2}%", record.accuracy);

    let _ = writeln!(out, "\nCustomer requirements:");
    for field in RequirementField::ALL {
        let value = record.customer_requirements.get(field).unwrap_or("-");
        let _ = writeln!(out, "  {:<20} {}", field, value);
    }

    let policies = &record.company_policies;
    let _ = writeln!(out, "\nCompany policies mentioned:");
    let _ = writeln!(out, "  {:<20} {}", "free_rc_transfer", yes_no(policies.free_rc_transfer));
    let _ = writeln!(out, "  {:<20} {}", "money_back_guarantee", yes_no(policies.money_back_guarantee));
    let _ = writeln!(out, "  {:<20} {}", "free_rsa", yes_no(policies.free_rsa));
    let _ = writeln!(out, "  {:<20} {}", "return_policy", yes_no(policies.return_policy));

    let objections = &record.customer_objections;
    let _ = writeln!(out, "\nCustomer objections:");
    let _ = writeln!(out, "  {:<20} {}", "refurbishment_quality", yes_no(objections.refurbishment_quality));
    let _ = writeln!(out, "  {:<20} {}", "car_issues", yes_no(objections.car_issues));
    let _ = writeln!(out, "  {:<20} {}", "price_issues", yes_no(objections.price_issues));
    let _ = writeln!(out, "  {:<20} {}", "experience_issues", yes_no(objections.experience_issues));

    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsift_domain::CustomerRequirements;

    fn sample_record() -> CallRecord {
        CallRecord {
            customer_requirements: CustomerRequirements {
                car_type: Some("hatchback".to_string()),
                color: Some("Red".to_string()),
                ..Default::default()
            },
            accuracy: 33.33,
            ..Default::default()
        }
    }

    #[test]
    fn test_json_keeps_absent_fields() {
        let rendered = render(&sample_record(), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["customer_requirements"]["car_type"], "hatchback");
        assert!(json["customer_requirements"]["fuel_type"].is_null());
        assert_eq!(json["accuracy"], 33.33);
    }

    #[test]
    fn test_summary_lists_every_field() {
        let rendered = render(&sample_record(), OutputFormat::Summary).unwrap();

        assert!(rendered.contains("Coverage accuracy: 33.33%"));
        for field in RequirementField::ALL {
            assert!(rendered.contains(field.as_str()));
        }
        assert!(rendered.contains("money_back_guarantee"));
        assert!(rendered.contains("experience_issues"));
    }
}
