//! Graceful shutdown handling for Pathlock server

use actix_web::dev::ServerHandle;
use tracing::{error, info};

/// Which signal asked the process to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    CtrlC,
    Terminate,
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
pub async fn wait_for_shutdown_signal() -> ShutdownReason {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => ShutdownReason::CtrlC,
        _ = terminate => ShutdownReason::Terminate,
    }
}

/// Stop the server gracefully once a shutdown signal arrives
///
/// In-flight requests are allowed to finish within the server's shutdown timeout.
pub fn spawn_shutdown_listener(handle: ServerHandle) {
    actix_rt::spawn(async move {
        let reason = wait_for_shutdown_signal().await;
        info!(?reason, "Shutdown signal received, stopping HTTP server gracefully");
        handle.stop(true).await;
        info!("Shutdown complete");
    });
}
