use serde::{Deserialize, Serialize};

/// Input to a parse, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRequest {
    pub phone_number: String,
    pub country_code: Option<String>,
}

impl ParseRequest {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            country_code: None,
        }
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// The explicit country code, with an empty value treated as absent.
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref().filter(|code| !code.is_empty())
    }
}
