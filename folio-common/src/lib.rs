//! Process-wide plumbing shared by the folio binary: logging setup and
//! shutdown signal handling.

mod logger;

pub use logger::Logger;

#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

/// Waits until the process receives a termination signal.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("failed to register SIGINT handler");
        let mut sighup = signal(SignalKind::hangup()).expect("failed to register SIGHUP handler");
        let mut sigquit = signal(SignalKind::quit()).expect("failed to register SIGQUIT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM signal");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT signal");
            }
            _ = sighup.recv() => {
                info!("Received SIGHUP signal");
            }
            _ = sigquit.recv() => {
                info!("Received SIGQUIT signal");
            }
        }
    }

    #[cfg(windows)]
    {
        let _ = ctrl_c().await;
        info!("Received ctrl-c signal");
    }
}
