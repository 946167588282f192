use dialtone_core::phone::PhoneNumber;

use crate::error::ParseError;
use crate::types::ParseRequest;

/// Entry point driving adapters call to parse a phone number.
///
/// Parsing is pure computation, so the port is synchronous and can be shared
/// across request handlers without locking.
pub trait PhoneNumberParser: Send + Sync {
    fn parse(&self, request: &ParseRequest) -> Result<PhoneNumber, ParseError>;
}
