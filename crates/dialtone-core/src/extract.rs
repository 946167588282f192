use crate::dial_plan::{DialCodeMatch, DialPlan};
use crate::normalize::clean_number;

/// Finds the dial code a number already starts with.
///
/// Candidates are tried in the plan's priority order, so a longer code wins
/// over a shorter one sharing its first digits. `None` is not an error: the
/// country then has to be supplied explicitly.
pub fn extract_dial_code(plan: &DialPlan, raw: &str) -> Option<DialCodeMatch> {
    let digits = clean_number(raw);
    plan.priority()
        .iter()
        .copied()
        .find(|candidate| digits.starts_with(candidate.dial_code))
}
