//! HTTP route handlers.
//!
//! Every response, including fallbacks and 404s, carries the permissive CORS
//! headers. Fact responses are additionally marked `no-store` since each one
//! carries its own timestamp.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod fact;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_FACT, CORS_ALLOW_HEADERS, CORS_ALLOW_ORIGIN};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Path of the fact endpoint
pub const FACT_PATH: &str = "/fact";

/// Legacy alias kept for clients of the first deployment
pub const FACT_ALIAS_PATH: &str = "/me";

pub const HEALTH_PATH: &str = "/health";

/// Creates the Axum router with all routes and response headers.
pub fn create_router(state: AppState) -> Router {
    // Facts - never cached, timestamp is per request
    let fact_routes = Router::new()
        .route(FACT_PATH, get(fact::show))
        .route(FACT_ALIAS_PATH, get(fact::show))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_FACT),
        ));

    // Health check - no upstream dependency
    let health_routes = Router::new().route(HEALTH_PATH, get(health::health));

    Router::new()
        .merge(fact_routes)
        .merge(health_routes)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
