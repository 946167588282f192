//! axum adapter exposing the phone-number parser over HTTP.
//!
//! ```text
//! GET /v1/phone-numbers?phoneNumber=<string>&countryCode=<string, optional>
//! ```
//!
//! Successful parses answer `200` with the split number; every rejection
//! answers `400` with the original input and a single `{field: message}` pair.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod request_id;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
