//! Booking Repository Implementation
//!
//! PostgreSQL implementation of the BookingRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Booking, BookingRepository};
use super::booking_exists;
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    user_id: String,
    conference_id: String,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            user_id: row.user_id,
            conference_id: row.conference_id,
        }
    }
}

/// PostgreSQL booking repository implementation.
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(&self, booking: &Booking) -> Result<(), AppError> {
        sqlx::query("INSERT INTO bookings (user_id, conference_id) VALUES ($1, $2)")
            .bind(&booking.user_id)
            .bind(&booking.conference_id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // (user_id, conference_id) is the primary key
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    booking_exists()
                }
                _ => AppError::Database(e),
            })?;

        Ok(())
    }

    async fn find_by_conference_id(&self, conference_id: &str) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT user_id, conference_id
            FROM bookings
            WHERE conference_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(conference_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn find_by_conference_id_and_user_id(
        &self,
        conference_id: &str,
        user_id: &str,
    ) -> Result<Option<Booking>, AppError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT user_id, conference_id
            FROM bookings
            WHERE conference_id = $1 AND user_id = $2
            "#,
        )
        .bind(conference_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Booking::from))
    }
}
