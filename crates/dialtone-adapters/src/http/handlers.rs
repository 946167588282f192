use axum::extract::{Query, State};
use axum::Json;

use dialtone_ports::types::ParseRequest;

use super::dto::{PhoneNumberQuery, PhoneNumberResponse};
use super::error::ApiError;
use super::state::AppState;

pub type HandlerResult<T> = Result<Json<T>, ApiError>;

/// GET /v1/phone-numbers
pub async fn get_phone_number(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> HandlerResult<PhoneNumberResponse> {
    let query = PhoneNumberQuery::from_pairs(pairs);
    let phone_number = query
        .phone_number
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingPhoneNumber)?;

    let request = ParseRequest {
        phone_number,
        country_code: query.country_code,
    };
    let phone = state.parser.parse(&request)?;

    Ok(Json(phone.into()))
}
