//! The parse pipeline: format check, space check, dial-code extraction, then
//! segmentation with either the embedded or the explicit country.
//!
//! Stops at the first failing stage and reports exactly one [`DomainError`].

use crate::dial_plan::{DialCodeMatch, DialPlan};
use crate::error::DomainError;
use crate::extract::extract_dial_code;
use crate::normalize::clean_number;
use crate::phone::PhoneNumber;
use crate::validate::{has_valid_spaces, is_iso_alpha2, is_valid_format};

/// Parses `raw` against `plan`.
///
/// `country_code` is consulted only when the number carries no recognizable
/// dial code; `None` and `Some("")` both count as missing.
pub fn parse(
    plan: &DialPlan,
    raw: &str,
    country_code: Option<&str>,
) -> Result<PhoneNumber, DomainError> {
    if !is_valid_format(raw) {
        return Err(DomainError::InvalidPhoneFormat);
    }
    if !has_valid_spaces(raw) {
        return Err(DomainError::InvalidSpacePlacement);
    }

    match extract_dial_code(plan, raw) {
        Some(found) => with_embedded_dial_code(plan, raw, found),
        None => with_explicit_country_code(plan, raw, country_code),
    }
}

fn with_embedded_dial_code(
    plan: &DialPlan,
    raw: &str,
    found: DialCodeMatch,
) -> Result<PhoneNumber, DomainError> {
    let digits = clean_number(raw);
    let subscriber = digits
        .strip_prefix(found.dial_code)
        .unwrap_or(digits.as_str());

    let area_code_length = plan
        .area_code_length(found.country_code)
        .ok_or(DomainError::UnsupportedCountry)?;

    Ok(PhoneNumber::assemble(
        found.country_code,
        found.dial_code,
        subscriber,
        area_code_length,
    ))
}

fn with_explicit_country_code(
    plan: &DialPlan,
    raw: &str,
    country_code: Option<&str>,
) -> Result<PhoneNumber, DomainError> {
    let country_code = match country_code {
        Some(code) if !code.is_empty() => code,
        _ => return Err(DomainError::MissingCountryCode),
    };
    if !is_iso_alpha2(country_code) {
        return Err(DomainError::InvalidCountryCodeFormat);
    }

    let country_code = country_code.to_ascii_uppercase();
    let dial_code = plan
        .dial_code(&country_code)
        .ok_or(DomainError::UnsupportedCountry)?;
    let area_code_length = plan
        .area_code_length(&country_code)
        .ok_or(DomainError::UnsupportedCountry)?;

    Ok(PhoneNumber::assemble(
        &country_code,
        dial_code,
        &clean_number(raw),
        area_code_length,
    ))
}
