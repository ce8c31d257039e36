//! Booking entity and repository trait.
//!
//! Maps to the `bookings` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A seat reserved by a user for a conference.
///
/// Maps to the `bookings` table:
/// - user_id: TEXT NOT NULL
/// - conference_id: TEXT NOT NULL
/// - PRIMARY KEY (user_id, conference_id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Booking {
    pub user_id: String,
    pub conference_id: String,
}

impl Booking {
    pub fn new(user_id: impl Into<String>, conference_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            conference_id: conference_id.into(),
        }
    }
}

/// Repository trait for Booking data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking.
    async fn create(&self, booking: &Booking) -> Result<(), AppError>;

    /// Find every booking made for a conference.
    async fn find_by_conference_id(&self, conference_id: &str) -> Result<Vec<Booking>, AppError>;

    /// Find the booking a user made for a conference, if any.
    async fn find_by_conference_id_and_user_id(
        &self,
        conference_id: &str,
        user_id: &str,
    ) -> Result<Option<Booking>, AppError>;
}
