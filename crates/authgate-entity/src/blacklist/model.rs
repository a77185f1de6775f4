//! Blacklisted token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A token invalidated by logout before its natural expiry.
///
/// References the raw token string, not a user row; the user id lives inside
/// the token payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlacklistedToken {
    /// Surrogate key.
    pub id: i64,
    /// The raw token string. Unique.
    pub token: String,
    /// The token's own expiry instant.
    pub expires_at: DateTime<Utc>,
    /// When the token was revoked.
    pub created_at: DateTime<Utc>,
}

impl BlacklistedToken {
    /// Whether the entry is dead at `now` and may be purged.
    ///
    /// Compared in whole seconds, the resolution of the token's `exp` claim,
    /// so an entry is never stale while its token still passes expiry checks.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.timestamp() < now.timestamp()
    }
}
