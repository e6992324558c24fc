//! HTTP server module.
//!
//! Binds a plaintext listener, prints the startup banner, and serves the
//! router until SIGINT/SIGTERM. There is no TLS and no connection draining:
//! on a termination signal the server stops right away and `main` exits 0.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, startup_banner};
pub use shutdown::ShutdownSignal;
