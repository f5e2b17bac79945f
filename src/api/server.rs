use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use crate::error::AppError;

/// Bind `address` and serve `app` until SIGINT or SIGTERM.
pub async fn serve(app: Router, address: SocketAddr) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| AppError::Bind { address, source })?;
    info!("Listening on {}", listener.local_addr()?);
    info!("  - GET  /v1/health            (health check)");
    info!("  - GET  /v1/keywords/default  (default keyword dictionary)");
    info!("  - POST /v1/columns           (list CSV columns)");
    info!("  - POST /v1/process           (split captions into statements)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
