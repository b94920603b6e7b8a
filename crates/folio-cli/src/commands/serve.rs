//! HTTP API server

use crate::api::{AppState, create_router};
use crate::console::CliConsole;
use folio_core::config::FolioConfig;
use folio_core::error::{FolioError, FolioResult};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Build the controller, bind and serve until Ctrl+C or SIGTERM
pub async fn run(config: &FolioConfig) -> FolioResult<()> {
    let console = CliConsole::default();
    let addr = config.server.socket_addr()?;

    let controller = super::build_controller(config)?;
    let router = create_router(Arc::new(AppState::new(controller)));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| FolioError::io(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!(%addr, "Folio API server starting");
    console.success(&format!("Web interface: http://{addr}"));
    console.info(&format!("API endpoints: http://{addr}/api/*"));
    console.info(&format!("API documentation: http://{addr}/api/docs"));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FolioError::io(format!("Server error: {e}")))?;

    tracing::info!("Folio API server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        () = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        },
    }
}
