//! Blacklisted token repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;
use authgate_entity::blacklist::BlacklistedToken;

use crate::traits::BlacklistStore;

/// Repository for revoked tokens.
#[derive(Debug, Clone)]
pub struct BlacklistRepository {
    pool: PgPool,
}

impl BlacklistRepository {
    /// Create a new blacklist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlacklistStore for BlacklistRepository {
    async fn find(&self, token: &str) -> AppResult<Option<BlacklistedToken>> {
        sqlx::query_as::<_, BlacklistedToken>("SELECT * FROM blacklisted_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to look up token", e)
            })
    }

    async fn insert(&self, token: &str, expires_at: DateTime<Utc>) -> AppResult<bool> {
        let inserted: Option<i64> = sqlx::query_scalar(
            "INSERT INTO blacklisted_tokens (token, expires_at) \
             VALUES ($1, $2) \
             ON CONFLICT (token) DO NOTHING \
             RETURNING id",
        )
        .bind(token)
        .bind(expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to blacklist token", e))?;

        Ok(inserted.is_some())
    }

    async fn delete_if_stale(&self, token: &str, now: DateTime<Utc>) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM blacklisted_tokens WHERE token = $1 AND expires_at < $2")
                .bind(token)
                .bind(now)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Persistence,
                        "Failed to delete stale blacklist entry",
                        e,
                    )
                })?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_stale(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM blacklisted_tokens WHERE expires_at < $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to purge blacklist", e)
            })?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blacklisted_tokens")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to count blacklist", e)
            })?;
        Ok(count as u64)
    }
}
