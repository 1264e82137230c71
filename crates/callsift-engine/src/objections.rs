//! Customer-objection detection
//!
//! Case-insensitive substring containment. The checks are independent, so a
//! transcript can raise several objections at once. `experience_issues` is a
//! disjunction over a small keyword set; the rest use a single phrase each.

use callsift_domain::CustomerObjections;

const REFURBISHMENT_QUALITY: &str = "refurbishment quality";
const CAR_ISSUES: &str = "car issues";
const PRICE_ISSUES: &str = "price";
const EXPERIENCE_KEYWORDS: [&str; 3] =
    ["customer experience", "wait time", "salesperson behavior"];

pub(crate) fn extract(text: &str) -> CustomerObjections {
    let lowered = text.to_lowercase();

    CustomerObjections {
        refurbishment_quality: lowered.contains(REFURBISHMENT_QUALITY),
        car_issues: lowered.contains(CAR_ISSUES),
        price_issues: lowered.contains(PRICE_ISSUES),
        experience_issues: EXPERIENCE_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword)),
    }
}
