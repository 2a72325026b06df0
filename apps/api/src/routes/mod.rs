pub mod health;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::analysis::handlers;
use crate::state::AppState;

const ALLOW_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze",
            post(handlers::handle_analyze)
                .options(handlers::handle_preflight)
                .fallback(handlers::handle_method_not_allowed),
        )
        .with_state(state)
        // The quiz frontend is served cross-origin, so every response,
        // errors and extractor rejections included, carries the permissive
        // CORS headers. CorsLayer cannot express this: it refuses the
        // credentialed wildcard origin and only decorates requests that carry
        // an Origin header.
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}
