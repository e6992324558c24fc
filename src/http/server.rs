//! HTTP server startup logic.

use std::future::IntoFuture;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::ServerError;

use super::shutdown::ShutdownSignal;

/// Bind the listening socket. A taken port or a forbidden address is fatal;
/// there is no retry.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Human-readable startup text written to stdout once the socket is bound.
pub fn startup_banner(port: u16) -> String {
    format!(
        "Test server running at http://localhost:{port}\n\
         Try accessing:\n    \
         1. http://localhost:{port}\n    \
         2. http://127.0.0.1:{port}\n    \
         3. http://0.0.0.0:{port}"
    )
}

/// Serve `app` on an already bound listener until `shutdown` fires.
///
/// In-flight connections are dropped, not drained.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: ShutdownSignal,
) -> Result<(), ServerError> {
    tokio::select! {
        result = axum::serve(listener, app).into_future() => result.map_err(ServerError::Serve),
        signal = shutdown.recv() => signal,
    }
}

/// Bind, announce, and serve.
///
/// This function blocks until the server stops.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let shutdown = ShutdownSignal::install()?;
    let listener = bind(addr).await?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;

    println!("{}", startup_banner(local_addr.port()));
    tracing::info!(addr = %local_addr, "Starting HTTP server (no TLS)");

    serve(listener, app, shutdown).await
}
