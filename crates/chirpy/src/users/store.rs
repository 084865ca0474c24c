//! The [`UserStore`] trait and its error type.

use async_trait::async_trait;
use thiserror::Error;

use super::User;

/// Errors produced by user storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// The database rejected or failed the query.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Variant name, safe to log: never contains user data.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::DuplicateEmail(_) => "duplicate_email",
            StoreError::Database(_) => "database",
        }
    }
}

/// Persistence for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user with a generated id and timestamps.
    async fn create_user(&self, email: &str) -> Result<User, StoreError>;

    /// Remove every user.
    async fn delete_all_users(&self) -> Result<(), StoreError>;
}
