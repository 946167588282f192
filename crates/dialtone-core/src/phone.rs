use serde::{Deserialize, Serialize};

/// A successfully parsed phone number, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    e164: String,
    country_code: String,
    dial_code: String,
    area_code: String,
    local_number: String,
}

impl PhoneNumber {
    /// Joins a dial code with subscriber digits and splits off the area code.
    ///
    /// `subscriber` must be ASCII digits. The area code is taken only when the
    /// subscriber digits are strictly longer than `area_code_length`; otherwise
    /// the area code is empty and every digit is local.
    pub fn assemble(
        country_code: &str,
        dial_code: &str,
        subscriber: &str,
        area_code_length: usize,
    ) -> Self {
        let (area_code, local_number) = if subscriber.len() > area_code_length {
            subscriber.split_at(area_code_length)
        } else {
            ("", subscriber)
        };

        Self {
            e164: format!("+{dial_code}{subscriber}"),
            country_code: country_code.to_string(),
            dial_code: dial_code.to_string(),
            area_code: area_code.to_string(),
            local_number: local_number.to_string(),
        }
    }

    /// Full number as `+` dial code and subscriber digits, no spaces.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn local_number(&self) -> &str {
        &self.local_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_area_code_when_longer() {
        let phone = PhoneNumber::assemble("US", "1", "2125690123", 3);
        assert_eq!(phone.e164(), "+12125690123");
        assert_eq!(phone.country_code(), "US");
        assert_eq!(phone.dial_code(), "1");
        assert_eq!(phone.area_code(), "212");
        assert_eq!(phone.local_number(), "5690123");
    }

    #[test]
    fn equal_length_has_no_area_code() {
        let phone = PhoneNumber::assemble("US", "1", "212", 3);
        assert_eq!(phone.e164(), "+1212");
        assert_eq!(phone.area_code(), "");
        assert_eq!(phone.local_number(), "212");
    }

    #[test]
    fn shorter_than_area_code_has_no_area_code() {
        let phone = PhoneNumber::assemble("GB", "44", "12", 4);
        assert_eq!(phone.area_code(), "");
        assert_eq!(phone.local_number(), "12");
    }

    #[test]
    fn zero_length_area_code_keeps_all_digits_local() {
        let phone = PhoneNumber::assemble("ZZ", "999", "123456", 0);
        assert_eq!(phone.area_code(), "");
        assert_eq!(phone.local_number(), "123456");
    }

    #[test]
    fn single_digit_area_code() {
        let phone = PhoneNumber::assemble("JP", "81", "123456", 1);
        assert_eq!(phone.e164(), "+81123456");
        assert_eq!(phone.area_code(), "1");
        assert_eq!(phone.local_number(), "23456");
    }
}
