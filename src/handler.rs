use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ItemStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
}

impl AppState {
    pub fn new(store: ItemStore) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}

/// Permissive CORS for browser clients.
///
/// `CorsLayer` refuses a wildcard origin alongside credentials, so it is set
/// up to mirror the origin and [`any_origin`] rewrites the header to `*`.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Answers `Access-Control-Allow-Origin: *` on every response, with or
/// without an `Origin` request header.
pub fn any_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}

/// Marks every response as JSON, empty bodies included.
pub fn json_content_type() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    )
}
