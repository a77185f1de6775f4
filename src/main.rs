//! AuthGate server entry point.
//!
//! Loads configuration, initializes logging, connects to PostgreSQL, applies
//! migrations, and serves the HTTP API until shutdown.

use tracing_subscriber::{EnvFilter, fmt};

use authgate_core::config::AppConfig;
use authgate_core::error::AppError;
use authgate_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var("AUTHGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config, &env).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_current_span(false)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig, env: &str) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env,
        algorithm = %config.auth.jwt_algorithm,
        token_ttl_hours = config.auth.access_token_ttl_hours,
        "Starting AuthGate"
    );

    let db = DatabasePool::connect(&config.database).await?;
    authgate_database::migration::run_migrations(db.pool()).await?;

    let result = authgate_api::run_server(config, db.pool().clone()).await;
    db.close().await;
    result
}
