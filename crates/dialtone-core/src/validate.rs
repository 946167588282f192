//! Shape checks run before any table lookup.

use crate::normalize::strip_plus;

/// Segments a spaced number may be split into: country, area and local.
const MAX_SEGMENTS: usize = 3;

/// True when, after one leading `+`, the input is non-blank and made only of
/// ASCII digits and spaces.
pub fn is_valid_format(raw: &str) -> bool {
    let body = strip_plus(raw);
    if body.trim().is_empty() {
        return false;
    }
    body.chars().all(|c| c.is_ascii_digit() || c == ' ')
}

/// True when spaces only separate at most three non-empty digit groups.
///
/// A number without spaces is always accepted.
pub fn has_valid_spaces(raw: &str) -> bool {
    let body = strip_plus(raw);

    if body.contains("  ") || body.starts_with(' ') || body.ends_with(' ') {
        return false;
    }

    let mut segments = 0;
    for segment in body.split(' ') {
        if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        segments += 1;
    }
    segments <= MAX_SEGMENTS
}

/// ISO 3166-1 alpha-2 shape: exactly two ASCII letters, either case.
pub fn is_iso_alpha2(country_code: &str) -> bool {
    country_code.len() == 2 && country_code.chars().all(|c| c.is_ascii_alphabetic())
}
