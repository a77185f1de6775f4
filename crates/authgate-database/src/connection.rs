//! PostgreSQL pool construction and liveness probing.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use authgate_core::config::DatabaseConfig;
use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;

/// Owns the sqlx pool shared by both repositories.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Opens the pool and proves it can reach the server before returning.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let target = mask_password(&config.url);
        info!(
            url = %target,
            max_connections = config.max_connections,
            "Opening PostgreSQL pool"
        );

        let pool = pool_options(config)
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Persistence,
                    format!("Cannot reach database at {target}"),
                    e,
                )
            })?;

        ping(&pool).await?;
        info!(url = %target, "PostgreSQL pool ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn into_pool(self) -> PgPool {
        self.pool
    }

    /// Waits for checked-out connections to return, then closes them.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .test_before_acquire(true)
}

/// Round-trips `SELECT 1` through the pool.
///
/// Used at startup and by the detailed health endpoint.
pub async fn ping(pool: &PgPool) -> AppResult<()> {
    let one: i32 = sqlx::query_scalar("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Database ping failed", e))?;

    if one != 1 {
        return Err(AppError::persistence(format!(
            "Database ping returned {one}"
        )));
    }
    debug!("Database ping ok");
    Ok(())
}

/// Replaces the password in a connection URL with `****`.
///
/// The userinfo ends at the last `@` before any query string, so passwords
/// that themselves contain `@` or `:` are masked whole.
pub fn mask_password(url: &str) -> String {
    let scheme_end = url.find("://").map_or(0, |p| p + 3);
    let rest = &url[scheme_end..];
    let authority_end = rest.find('?').unwrap_or(rest.len());

    let Some(at) = rest[..authority_end].rfind('@') else {
        return url.to_string();
    };
    let Some(colon) = rest[..at].find(':') else {
        return url.to_string();
    };

    format!(
        "{}{}:****{}",
        &url[..scheme_end],
        &rest[..colon],
        &rest[at..]
    )
}
