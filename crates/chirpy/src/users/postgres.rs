//! [`PgUserStore`]: Postgres-backed user storage via `sqlx`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use uuid::Uuid;

use super::{StoreError, User, UserStore};

const MAX_CONNECTIONS: u32 = 5;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    email TEXT NOT NULL UNIQUE
)
"#;

/// User store backed by a Postgres connection pool.
#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Connect to `url` and make sure the `users` table exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the schema statement fails.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await
            .context("failed to connect to Postgres")?;

        sqlx::query(CREATE_USERS_TABLE)
            .execute(&pool)
            .await
            .context("failed to create users table")?;

        info!("postgres user store ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, email: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, created_at, updated_at, email)
            VALUES ($1, NOW(), NOW(), $2)
            RETURNING id, created_at, updated_at, email
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::DuplicateEmail(email.to_owned())
            }
            other => StoreError::Database(other),
        })?;

        Ok(user)
    }

    async fn delete_all_users(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        Ok(())
    }
}
