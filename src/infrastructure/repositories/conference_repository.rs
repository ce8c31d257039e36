//! Conference Repository Implementation
//!
//! PostgreSQL implementation of the ConferenceRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Conference, ConferenceRepository, CONFERENCE_NOT_FOUND};
use super::conference_exists;
use crate::shared::error::AppError;

/// Database row representation matching the conferences table schema.
#[derive(Debug, sqlx::FromRow)]
struct ConferenceRow {
    id: String,
    organizer_id: String,
    title: String,
    seats: i32,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl ConferenceRow {
    /// Convert database row to domain Conference entity.
    fn into_conference(self) -> Conference {
        Conference {
            id: self.id,
            organizer_id: self.organizer_id,
            title: self.title,
            seats: self.seats,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// PostgreSQL conference repository implementation.
#[derive(Clone)]
pub struct PgConferenceRepository {
    pool: PgPool,
}

impl PgConferenceRepository {
    /// Create a new PgConferenceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConferenceRepository for PgConferenceRepository {
    async fn create(&self, conference: &Conference) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO conferences (id, organizer_id, title, seats, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&conference.id)
        .bind(&conference.organizer_id)
        .bind(&conference.title)
        .bind(conference.seats)
        .bind(conference.start_date)
        .bind(conference.end_date)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                conference_exists(&conference.id)
            }
            _ => AppError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Conference>, AppError> {
        let row = sqlx::query_as::<_, ConferenceRow>(
            r#"
            SELECT id, organizer_id, title, seats, start_date, end_date
            FROM conferences
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_conference()))
    }

    /// The organizer is deliberately left out of the SET clause.
    async fn update(&self, conference: &Conference) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE conferences
            SET title = $2,
                seats = $3,
                start_date = $4,
                end_date = $5
            WHERE id = $1
            "#,
        )
        .bind(&conference.id)
        .bind(&conference.title)
        .bind(conference.seats)
        .bind(conference.start_date)
        .bind(conference.end_date)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(CONFERENCE_NOT_FOUND.into()));
        }

        Ok(())
    }
}
