//! [`MemoryUserStore`]: process-local user storage.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, User, UserStore};

/// In-memory store keyed by email.
///
/// Enforces email uniqueness the same way the database schema does.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    /// Create a new, empty [`MemoryUserStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, email: &str) -> Result<User, StoreError> {
        let mut users = self.inner.write().await;
        if users.contains_key(email) {
            return Err(StoreError::DuplicateEmail(email.to_owned()));
        }
        let user = User::new(email);
        users.insert(email.to_owned(), user.clone());
        Ok(user)
    }

    async fn delete_all_users(&self) -> Result<(), StoreError> {
        self.inner.write().await.clear();
        Ok(())
    }
}
