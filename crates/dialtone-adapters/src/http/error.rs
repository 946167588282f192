//! Mapping of parse failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use dialtone_core::error::ErrorField;
use dialtone_ports::error::ParseError;

use super::dto::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    /// `phoneNumber` absent from the query string, or empty.
    MissingPhoneNumber,
    Parse(ParseError),
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::Parse(err)
    }
}

impl ApiError {
    pub fn to_body(&self) -> ErrorResponse {
        match self {
            ApiError::MissingPhoneNumber => ErrorResponse::new(
                "",
                ErrorField::PhoneNumber.as_str(),
                "required parameter is missing",
            ),
            ApiError::Parse(err) => ErrorResponse::new(
                err.phone_number.as_str(),
                err.field().as_str(),
                err.reason.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every failure here is a problem with the caller's input.
        (StatusCode::BAD_REQUEST, Json(self.to_body())).into_response()
    }
}
