use thiserror::Error;

/// Request field a [`DomainError`] is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorField {
    PhoneNumber,
    CountryCode,
}

impl ErrorField {
    /// Wire name of the field, as used in query parameters and error bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorField::PhoneNumber => "phoneNumber",
            ErrorField::CountryCode => "countryCode",
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid format")]
    InvalidPhoneFormat,
    #[error("invalid space placement")]
    InvalidSpacePlacement,
    #[error("required value is missing")]
    MissingCountryCode,
    #[error("invalid format")]
    InvalidCountryCodeFormat,
    #[error("unsupported country")]
    UnsupportedCountry,
}

impl DomainError {
    pub fn field(&self) -> ErrorField {
        match self {
            DomainError::InvalidPhoneFormat | DomainError::InvalidSpacePlacement => {
                ErrorField::PhoneNumber
            }
            DomainError::MissingCountryCode
            | DomainError::InvalidCountryCodeFormat
            | DomainError::UnsupportedCountry => ErrorField::CountryCode,
        }
    }
}
