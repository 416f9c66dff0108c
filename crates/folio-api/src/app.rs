//! Application builder and server runner.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::info;

use folio_core::config::AppConfig;
use folio_core::error::AppError;

use crate::cleanup::TokenCleanup;
use crate::mailer::LogMailer;
use crate::router::build_router;
use crate::state::AppState;
use crate::store::{MemoryTokenStore, MemoryUserStore};

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}

/// Runs the Folio server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(
        environment = %config.server.environment,
        "Starting Folio server..."
    );

    // ── Step 1: Stores ───────────────────────────────────────────
    let users = Arc::new(MemoryUserStore::new());
    let tokens = Arc::new(MemoryTokenStore::new());
    let mailer = Arc::new(LogMailer::new(config.auth.app_base_url.clone()));

    // ── Step 2: Auth components ──────────────────────────────────
    let cleanup_interval =
        Duration::from_secs(config.auth.token_cleanup_interval_minutes.saturating_mul(60));
    let bind_address = config.server.bind_address();
    let state = AppState::new(config, users, tokens.clone(), mailer)?;

    // ── Step 3: Background token cleanup ─────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let cleanup = TokenCleanup::new(tokens).spawn(cleanup_interval, shutdown_rx);

    // ── Step 4: Serve ────────────────────────────────────────────
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    info!(address = %bind_address, "Listening");

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    let _ = shutdown_tx.send(true);
    let _ = cleanup.await;
    info!("Folio server stopped");
    Ok(())
}

/// Waits for Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
