//! Wire types for the phone-number endpoint.

use std::collections::BTreeMap;

use dialtone_core::phone::PhoneNumber;
use serde::{Deserialize, Serialize};

/// Query string of `GET /v1/phone-numbers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberQuery {
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
}

impl PhoneNumberQuery {
    /// Picks the known keys out of decoded query pairs. When a key repeats,
    /// the first value is used; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "phoneNumber" => &mut query.phone_number,
                "countryCode" => &mut query.country_code,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberResponse {
    pub phone_number: String,
    pub country_code: String,
    pub area_code: String,
    pub local_phone_number: String,
}

impl From<PhoneNumber> for PhoneNumberResponse {
    fn from(phone: PhoneNumber) -> Self {
        Self {
            phone_number: phone.e164().to_string(),
            country_code: phone.country_code().to_string(),
            area_code: phone.area_code().to_string(),
            local_phone_number: phone.local_number().to_string(),
        }
    }
}

/// Body of every `400` answer. `error` holds exactly one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub phone_number: String,
    pub error: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn new(
        phone_number: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            error: BTreeMap::from([(field.into(), message.into())]),
        }
    }
}
