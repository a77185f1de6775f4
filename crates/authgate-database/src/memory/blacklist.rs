//! In-memory revocation store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use authgate_core::result::AppResult;
use authgate_entity::blacklist::BlacklistedToken;

use crate::traits::BlacklistStore;

/// Blacklist store backed by a concurrent map keyed by raw token.
#[derive(Debug, Default)]
pub struct MemoryBlacklistStore {
    entries: DashMap<String, BlacklistedToken>,
    next_id: AtomicI64,
}

impl MemoryBlacklistStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlacklistStore for MemoryBlacklistStore {
    async fn find(&self, token: &str) -> AppResult<Option<BlacklistedToken>> {
        Ok(self.entries.get(token).map(|e| e.value().clone()))
    }

    async fn insert(&self, token: &str, expires_at: DateTime<Utc>) -> AppResult<bool> {
        match self.entries.entry(token.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                slot.insert(BlacklistedToken {
                    id,
                    token: token.to_string(),
                    expires_at,
                    created_at: Utc::now(),
                });
                Ok(true)
            }
        }
    }

    async fn delete_if_stale(&self, token: &str, now: DateTime<Utc>) -> AppResult<bool> {
        Ok(self
            .entries
            .remove_if(token, |_, entry| entry.is_stale(now))
            .is_some())
    }

    async fn purge_stale(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let mut removed = 0u64;
        self.entries.retain(|_, entry| {
            let stale = entry.is_stale(now);
            if stale {
                removed += 1;
            }
            !stale
        });
        Ok(removed)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.entries.len() as u64)
    }
}
