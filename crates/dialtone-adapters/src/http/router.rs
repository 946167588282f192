//! Router configuration: the single versioned route plus request-id and
//! tracing middleware.

use axum::extract::Request;
use axum::routing::get;
use axum::Router;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::request_id::{request_id_header, UuidRequestId, REQUEST_ID_HEADER};
use super::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api_v1 = Router::new().route("/phone-numbers", get(handlers::get_phone_number));

    // Layers run outermost last: the id is set before the span is opened and
    // copied onto the response on the way out.
    Router::new()
        .nest("/v1", api_v1)
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id,
            )
        }))
        .layer(SetRequestIdLayer::new(request_id_header(), UuidRequestId))
        .with_state(state)
}
