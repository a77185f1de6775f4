//! Application builder: wires router, middleware, and state into a server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;
use tokio::sync::watch;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use authgate_auth::BlacklistSweeper;
use authgate_core::config::AppConfig;
use authgate_core::error::AppError;
use authgate_database::{BlacklistRepository, BlacklistStore, UserRepository, UserStore};
use authgate_service::AuthService;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and layers.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.server.cors);
    let timeout = Duration::from_secs(state.server.request_timeout_seconds);

    build_router(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the AuthGate server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    info!("Starting AuthGate server...");

    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));
    let blacklist: Arc<dyn BlacklistStore> = Arc::new(BlacklistRepository::new(db_pool));

    let auth_service = AuthService::new(&config.auth, Arc::clone(&users), blacklist)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper_handle = match config.auth.blacklist_sweep_interval_seconds {
        0 => None,
        secs => Some(
            BlacklistSweeper::new(
                auth_service.revocations().clone(),
                Duration::from_secs(secs),
            )
            .spawn(shutdown_rx),
        ),
    };

    let state = AppState::new(config.server.clone(), auth_service, users);
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "AuthGate server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(handle) = sweeper_handle {
        if let Err(e) = handle.await {
            warn!(error = %e, "Blacklist sweeper task ended abnormally");
        }
    }

    info!("AuthGate server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
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
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
