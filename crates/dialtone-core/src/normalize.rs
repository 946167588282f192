//! Canonicalization of raw phone-number input.

/// Removes a single leading `+`, leaving everything else in place.
pub fn strip_plus(raw: &str) -> &str {
    raw.strip_prefix('+').unwrap_or(raw)
}

/// Canonical digit string: one leading `+` and every space removed.
///
/// Does not validate; non-digit characters other than spaces pass through.
pub fn clean_number(raw: &str) -> String {
    strip_plus(raw).chars().filter(|c| *c != ' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clean_number_removes_plus_and_spaces() {
        assert_eq!(clean_number("+1 212 569 0123"), "12125690123");
        assert_eq!(clean_number("+12125690123"), "12125690123");
        assert_eq!(clean_number("1 212 569 0123"), "12125690123");
        assert_eq!(clean_number("12125690123"), "12125690123");
    }

    #[test]
    fn clean_number_handles_degenerate_input() {
        assert_eq!(clean_number(""), "");
        assert_eq!(clean_number("+"), "");
        assert_eq!(clean_number("1   212   569"), "1212569");
        assert_eq!(clean_number(" 123 456 "), "123456");
    }

    #[test]
    fn clean_number_keeps_a_plus_that_follows_a_space() {
        // Only a leading `+` is stripped; such input never passes the format check.
        assert_eq!(clean_number(" +"), "+");
        assert_eq!(clean_number(" +12"), "+12");
    }

    #[test]
    fn strip_plus_removes_only_one() {
        assert_eq!(strip_plus("+12125690123"), "12125690123");
        assert_eq!(strip_plus("12125690123"), "12125690123");
        assert_eq!(strip_plus("+"), "");
        assert_eq!(strip_plus(""), "");
        assert_eq!(strip_plus("+1 212 569 0123"), "1 212 569 0123");
        assert_eq!(strip_plus("++123"), "+123");
    }

    proptest! {
        #[test]
        fn prop_clean_number_is_idempotent(raw in "\\+?[0-9 ]{0,20}") {
            let once = clean_number(&raw);
            prop_assert_eq!(clean_number(&once), once.clone());
            prop_assert!(!once.contains(' '));
        }
    }
}
