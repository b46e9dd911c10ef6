//! HTTP route handlers.
//!
//! The hotel listing carries its own Cache-Control header; the health probe is
//! never cached. Every request, including ones that fall through to the
//! router's 404/405 answers, runs inside the request ID middleware.

pub mod health;
pub mod hotels;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HOTELS, HOTELS_PATH};
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    let hotel_routes = Router::new().route(HOTELS_PATH, get(hotels::list)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOTELS),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(hotel_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
