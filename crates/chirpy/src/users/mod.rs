//! Registered users and the storage backends behind them.
//!
//! The HTTP layer only sees the [`UserStore`] trait. [`PgUserStore`] is used
//! when a database URL is configured; [`MemoryUserStore`] otherwise.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};

use chrono::{DateTime, Utc};
use common::protocol::UserResponse;
use uuid::Uuid;

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl User {
    /// A new record with a fresh id and both timestamps set to now.
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.into(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            created_at: u.created_at,
            updated_at: u.updated_at,
            email: u.email,
        }
    }
}
