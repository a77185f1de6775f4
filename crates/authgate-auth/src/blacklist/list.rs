//! The revocation list: tokens invalidated before their natural expiry.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tracing::debug;

use authgate_core::result::AppResult;
use authgate_database::BlacklistStore;

/// Result of adding a token to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevocationOutcome {
    /// The token was newly revoked.
    Added,
    /// The token was already on the list.
    AlreadyPresent,
}

/// Blacklist lookups with lazy cleanup of dead entries.
#[derive(Debug, Clone)]
pub struct RevocationList {
    store: Arc<dyn BlacklistStore>,
}

impl RevocationList {
    pub fn new(store: Arc<dyn BlacklistStore>) -> Self {
        Self { store }
    }

    /// Whether `token` is currently revoked.
    ///
    /// An entry whose expiry has passed is deleted and reported as not
    /// revoked; the token itself fails expiry checks anyway.
    pub async fn is_blacklisted(&self, token: &str) -> AppResult<bool> {
        self.is_blacklisted_at(token, Utc::now()).await
    }

    pub(crate) async fn is_blacklisted_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let now = now.trunc_subsecs(0);
        let Some(entry) = self.store.find(token).await? else {
            return Ok(false);
        };

        if entry.is_stale(now) {
            if self.store.delete_if_stale(token, now).await? {
                debug!(entry_id = entry.id, "Removed stale blacklist entry");
            }
            return Ok(false);
        }

        Ok(true)
    }

    /// Revokes `token` until `expires_at`. Idempotent.
    pub async fn add(&self, token: &str, expires_at: DateTime<Utc>) -> AppResult<RevocationOutcome> {
        if self.store.insert(token, expires_at).await? {
            Ok(RevocationOutcome::Added)
        } else {
            Ok(RevocationOutcome::AlreadyPresent)
        }
    }

    /// Deletes every entry whose expiry has passed.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        self.store.purge_stale(Utc::now().trunc_subsecs(0)).await
    }

    /// Number of entries, including dead ones not yet purged.
    pub async fn len(&self) -> AppResult<u64> {
        self.store.count().await
    }
}
