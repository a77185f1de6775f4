//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;
use authgate_entity::user::{CreateUser, User};

use crate::traits::UserStore;

const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// Repository for user persistence.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to count users", e)
            })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email, name, surname, password_hash, \
                                profession, date_of_birth, photo_url, consent) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.surname)
        .bind(&data.password_hash)
        .bind(&data.profession)
        .bind(data.date_of_birth)
        .bind(&data.photo_url)
        .bind(data.consent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    if let Some(conflict) = conflict_for_constraint(db_err.constraint()) {
                        return conflict;
                    }
                    warn!(
                        constraint = ?db_err.constraint(),
                        "Unique violation on unexpected constraint"
                    );
                }
            }
            AppError::with_source(ErrorKind::Persistence, "Failed to create user", e)
        })
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to find user by username", e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to find user by id", e)
            })
    }

    async fn health_check(&self) -> AppResult<bool> {
        crate::connection::ping(&self.pool).await.map(|()| true)
    }
}

/// Translate a violated unique constraint into the matching domain error.
fn conflict_for_constraint(constraint: Option<&str>) -> Option<AppError> {
    match constraint {
        Some(USERNAME_CONSTRAINT) => Some(AppError::duplicate_username()),
        Some(EMAIL_CONSTRAINT) => Some(AppError::duplicate_email()),
        _ => None,
    }
}
