pub mod error;
pub mod inbound;
pub mod types;
