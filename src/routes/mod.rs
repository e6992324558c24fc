//! HTTP route handlers.
//!
//! Exactly two GET routes exist. Everything else is 404, including other
//! methods on a known path.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use http::StatusCode;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;

/// Creates the Axum router with both routes and the request tracing layer.
pub fn create_router() -> Router {
    let home_routes = Router::new().route("/", get(home::index));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        // Must follow the merges: it only reaches routes already registered
        .method_not_allowed_fallback(|| async { StatusCode::NOT_FOUND })
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
