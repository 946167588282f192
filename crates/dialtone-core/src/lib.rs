pub mod dial_plan;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod parser;
pub mod phone;
pub mod validate;

pub use dial_plan::{DialCodeMatch, DialPlan};
pub use error::{DomainError, ErrorField};
pub use parser::parse;
pub use phone::PhoneNumber;
