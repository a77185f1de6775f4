//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::user::{CreateUser, User};

use crate::traits::UserStore;

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<Uuid, User>,
    by_username: HashMap<String, Uuid>,
    by_email: HashMap<String, Uuid>,
}

/// User store backed by process memory.
///
/// Both uniqueness checks and the insert happen under one write lock, so two
/// concurrent registrations for the same username cannot both succeed.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;

        if inner.by_username.contains_key(&data.username) {
            return Err(AppError::duplicate_username());
        }
        if inner.by_email.contains_key(&data.email) {
            return Err(AppError::duplicate_email());
        }

        let user = data.clone().into_user(Uuid::now_v7(), Utc::now());
        inner.by_username.insert(user.username.clone(), user.id);
        inner.by_email.insert(user.email.clone(), user.id);
        inner.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_username
            .get(username)
            .and_then(|id| inner.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.by_id.get(&id).cloned())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
