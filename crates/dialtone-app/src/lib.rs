pub mod phone_number_service;

pub use phone_number_service::PhoneNumberService;
