//! Company-policy detection
//!
//! Pure substring containment against fixed phrases. Matching is
//! case-sensitive and exact: policy phrases are brand wording the seller
//! reads out verbatim, and a paraphrase does not count as a mention.

use callsift_domain::CompanyPolicies;

const FREE_RC_TRANSFER: &str = "Free RC Transfer";
const MONEY_BACK_GUARANTEE: &str = "5-Day Money Back Guarantee";
const FREE_RSA: &str = "Free RSA for One Year";
const RETURN_POLICY: &str = "Return Policy";

pub(crate) fn extract(text: &str) -> CompanyPolicies {
    CompanyPolicies {
        free_rc_transfer: text.contains(FREE_RC_TRANSFER),
        money_back_guarantee: text.contains(MONEY_BACK_GUARANTEE),
        free_rsa: text.contains(FREE_RSA),
        return_policy: text.contains(RETURN_POLICY),
    }
}
