use dialtone_core::dial_plan::DialPlan;
use dialtone_core::parser;
use dialtone_core::phone::PhoneNumber;
use dialtone_ports::error::ParseError;
use dialtone_ports::inbound::PhoneNumberParser;
use dialtone_ports::types::ParseRequest;

pub struct PhoneNumberService {
    plan: &'static DialPlan,
}

impl PhoneNumberService {
    pub fn new(plan: &'static DialPlan) -> Self {
        Self { plan }
    }

    /// Service over the builtin country tables.
    pub fn builtin() -> Self {
        Self::new(DialPlan::builtin())
    }

    pub fn plan(&self) -> &'static DialPlan {
        self.plan
    }
}

impl PhoneNumberParser for PhoneNumberService {
    fn parse(&self, request: &ParseRequest) -> Result<PhoneNumber, ParseError> {
        match parser::parse(self.plan, &request.phone_number, request.country_code()) {
            Ok(phone) => {
                tracing::debug!(
                    country_code = phone.country_code(),
                    dial_code = phone.dial_code(),
                    area_code = phone.area_code(),
                    "parsed phone number"
                );
                Ok(phone)
            }
            Err(reason) => {
                tracing::info!(
                    field = reason.field().as_str(),
                    reason = %reason,
                    "rejected phone number"
                );
                Err(ParseError::new(request.phone_number.as_str(), reason))
            }
        }
    }
}
