//! Store traits implemented by the Postgres repositories and the in-memory stores.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use authgate_core::result::AppResult;
use authgate_entity::blacklist::BlacklistedToken;
use authgate_entity::user::{CreateUser, User};

/// Persists user records and enforces username/email uniqueness.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new user atomically.
    ///
    /// A collision on username or email fails with `DuplicateUsername` or
    /// `DuplicateEmail` and leaves the store unmodified. Uniqueness is decided
    /// by the write itself, never by an earlier read.
    async fn create_user(&self, data: &CreateUser) -> AppResult<User>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Persists revoked tokens.
#[async_trait]
pub trait BlacklistStore: Send + Sync + std::fmt::Debug + 'static {
    /// Look up an entry by raw token string.
    async fn find(&self, token: &str) -> AppResult<Option<BlacklistedToken>>;

    /// Insert an entry. Returns `false` when the token was already present.
    async fn insert(&self, token: &str, expires_at: DateTime<Utc>) -> AppResult<bool>;

    /// Delete the entry for `token` only if it expired before `now`.
    async fn delete_if_stale(&self, token: &str, now: DateTime<Utc>) -> AppResult<bool>;

    /// Delete every entry that expired before `now`. Returns the number removed.
    async fn purge_stale(&self, now: DateTime<Utc>) -> AppResult<u64>;

    /// Total number of entries, stale ones included.
    async fn count(&self) -> AppResult<u64>;
}
