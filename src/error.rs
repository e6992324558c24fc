use std::io;
use std::net::SocketAddr;

/// Fatal server errors. None of these can occur while handling a request;
/// they end the process with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(io::Error),

    #[error("Failed to install signal handler: {0}")]
    Signal(io::Error),
}
