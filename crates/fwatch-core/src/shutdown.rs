//! Termination signals for the long-running pipeline.
//!
//! The pipeline has no stop command. A signal ends the process: whatever is
//! queued or in flight is abandoned and the binary exits successfully.

use tokio::sync::broadcast;

use crate::{Error, Result};

/// Which signal asked the process to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl-C
    Interrupt,
    /// SIGTERM
    Terminate,
}

/// Installed SIGINT and SIGTERM listeners
pub struct TerminationSignals {
    rx: broadcast::Receiver<ShutdownSignal>,
}

impl ShutdownSignal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

impl std::fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TerminationSignals {
    /// Register the signal handlers
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `Error::System` if a handler cannot be registered
    pub fn install() -> Result<Self> {
        let (tx, rx) = broadcast::channel(2);

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigint = signal(SignalKind::interrupt())
                .map_err(|e| Error::io_error(format!("Failed to setup SIGINT: {e}")))?;
            let mut sigterm = signal(SignalKind::terminate())
                .map_err(|e| Error::io_error(format!("Failed to setup SIGTERM: {e}")))?;

            let interrupt_tx = tx.clone();
            tokio::spawn(async move {
                if sigint.recv().await.is_some() {
                    let _ = interrupt_tx.send(ShutdownSignal::Interrupt);
                }
            });
            tokio::spawn(async move {
                if sigterm.recv().await.is_some() {
                    let _ = tx.send(ShutdownSignal::Terminate);
                }
            });
        }

        #[cfg(not(unix))]
        {
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = tx.send(ShutdownSignal::Interrupt);
                }
            });
        }

        Ok(Self { rx })
    }

    /// Wait for the first termination signal
    pub async fn recv(&mut self) -> ShutdownSignal {
        loop {
            match self.rx.recv().await {
                Ok(signal) => {
                    tracing::info!(signal = %signal, "received termination signal");
                    return signal;
                }
                Err(broadcast::error::RecvError::Lagged(_)) => {}
                // Both forwarders are gone; no signal can arrive any more.
                Err(broadcast::error::RecvError::Closed) => std::future::pending::<()>().await,
            }
        }
    }
}
