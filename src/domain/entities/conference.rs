//! Conference entity and repository trait.
//!
//! Maps to the `conferences` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Largest seat capacity a conference may have.
pub const MAX_SEATS: i32 = 1000;

/// Smallest seat capacity a conference may have.
pub const MIN_SEATS: i32 = 20;

/// Minimum notice, in whole days, between now and the conference start.
pub const MIN_NOTICE_DAYS: i64 = 3;

/// Maximum duration of a conference, in whole hours.
pub const MAX_DURATION_HOURS: i64 = 3;

/// Represents a conference organized by a user.
///
/// Maps to the `conferences` table:
/// - id: TEXT PRIMARY KEY
/// - organizer_id: TEXT NOT NULL
/// - title: TEXT NOT NULL
/// - seats: INTEGER NOT NULL
/// - start_date: TIMESTAMPTZ NOT NULL
/// - end_date: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    /// Generated identifier (primary key)
    pub id: String,

    /// User ID of the organizer, the only user allowed to modify the conference
    pub organizer_id: String,

    /// Conference title
    pub title: String,

    /// Seat capacity
    pub seats: i32,

    /// Start of the conference
    pub start_date: DateTime<Utc>,

    /// End of the conference
    pub end_date: DateTime<Utc>,
}

impl Conference {
    /// Check if a user is the organizer of this conference.
    pub fn is_organizer(&self, user_id: &str) -> bool {
        self.organizer_id == user_id
    }

    /// Check whether the conference starts less than three days after `now`.
    pub fn is_too_close(&self, now: DateTime<Utc>) -> bool {
        (self.start_date - now).num_days() < MIN_NOTICE_DAYS
    }

    /// Check whether the conference lasts more than three hours.
    pub fn is_too_long(&self) -> bool {
        (self.end_date - self.start_date).num_hours() > MAX_DURATION_HOURS
    }

    pub fn has_too_many_seats(&self) -> bool {
        self.seats > MAX_SEATS
    }

    pub fn has_not_enough_seats(&self) -> bool {
        self.seats < MIN_SEATS
    }

    /// Check that the conference ends after it starts.
    pub fn has_valid_range(&self) -> bool {
        self.end_date > self.start_date
    }

    /// Copy of this conference with a new seat capacity.
    pub fn with_seats(&self, seats: i32) -> Self {
        Self {
            seats,
            ..self.clone()
        }
    }

    /// Copy of this conference with new start and end dates.
    pub fn with_dates(&self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
            ..self.clone()
        }
    }
}

/// Repository trait for Conference data access operations.
///
/// `update` on an unknown conference fails with `AppError::NotFound`
/// regardless of the backing store.
#[async_trait]
pub trait ConferenceRepository: Send + Sync {
    /// Persist a new conference.
    async fn create(&self, conference: &Conference) -> Result<(), AppError>;

    /// Find a conference by its ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Conference>, AppError>;

    /// Replace the stored title, seats and dates of an existing conference.
    async fn update(&self, conference: &Conference) -> Result<(), AppError>;
}

/// Message carried by the not-found error of every conference lookup.
pub const CONFERENCE_NOT_FOUND: &str = "Conference not found";
