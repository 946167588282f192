use dialtone_core::error::{DomainError, ErrorField};
use thiserror::Error;

/// A rejected parse, carrying the input exactly as the caller sent it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field} rejected for {phone_number:?}: {reason}", field = .reason.field().as_str())]
pub struct ParseError {
    pub phone_number: String,
    #[source]
    pub reason: DomainError,
}

impl ParseError {
    pub fn new(phone_number: impl Into<String>, reason: DomainError) -> Self {
        Self {
            phone_number: phone_number.into(),
            reason,
        }
    }

    pub fn field(&self) -> ErrorField {
        self.reason.field()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_original_input() {
        let err = ParseError::new("351 21 094 2000", DomainError::InvalidSpacePlacement);
        assert_eq!(err.phone_number, "351 21 094 2000");
        assert_eq!(err.field(), ErrorField::PhoneNumber);
    }

    #[test]
    fn display_names_field_and_reason() {
        let err = ParseError::new("631 311 8150", DomainError::MissingCountryCode);
        assert_eq!(
            err.to_string(),
            "countryCode rejected for \"631 311 8150\": required value is missing"
        );
    }
}
