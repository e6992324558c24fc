//! test-server: a minimal HTTP liveness server.
//!
//! Serves a fixed greeting at `/` and `{"status":"healthy"}` at `/health`.
//! The binary in `main.rs` wires configuration, tracing and the server
//! together; everything it needs is exposed here so tests can drive the
//! router and the listener directly.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::ServerError;
pub use routes::create_router;
