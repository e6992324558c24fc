//! Termination signal handling.
//!
//! Handles SIGTERM and SIGINT (Ctrl+C). Either one ends the serve loop.
//! Handlers are registered before the banner is printed, so a signal sent
//! as soon as the server announces itself is never lost.

use crate::error::ServerError;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Registered termination signal handlers.
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl ShutdownSignal {
    /// Install the handlers. Fails only if the OS refuses the registration.
    #[cfg(unix)]
    pub fn install() -> Result<Self, ServerError> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt()).map_err(ServerError::Signal)?,
            terminate: signal(SignalKind::terminate()).map_err(ServerError::Signal)?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> Result<Self, ServerError> {
        Ok(Self {})
    }

    /// Resolves once the first termination signal arrives.
    #[cfg(unix)]
    pub async fn recv(self) -> Result<(), ServerError> {
        let Self {
            mut interrupt,
            mut terminate,
        } = self;

        tokio::select! {
            _ = interrupt.recv() => {
                tracing::info!("Received Ctrl+C, stopping server");
            }
            _ = terminate.recv() => {
                tracing::info!("Received SIGTERM, stopping server");
            }
        }
        Ok(())
    }

    #[cfg(not(unix))]
    pub async fn recv(self) -> Result<(), ServerError> {
        tokio::signal::ctrl_c().await.map_err(ServerError::Signal)?;
        tracing::info!("Received Ctrl+C, stopping server");
        Ok(())
    }
}
