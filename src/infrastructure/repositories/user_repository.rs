//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{User, UserRepository};
use super::{user_email_exists, user_id_exists};
use crate::shared::error::AppError;

/// Name Postgres gives the `UNIQUE` constraint on `users.email_address`.
const USERS_EMAIL_CONSTRAINT: &str = "users_email_address_key";

/// Database row representation matching the users table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    email_address: String,
    password: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            email_address: self.email_address,
            password: self.password,
        }
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (id, email_address, password) VALUES ($1, $2, $3)")
            .bind(&user.id)
            .bind(&user.email_address)
            .bind(&user.password)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    match db_err.constraint() {
                        Some(USERS_EMAIL_CONSTRAINT) => user_email_exists(),
                        _ => user_id_exists(&user.id),
                    }
                }
                _ => AppError::Database(e),
            })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email_address, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_email_address(&self, email_address: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email_address, password FROM users WHERE email_address = $1",
        )
        .bind(email_address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }
}
