//! In-Memory Repository Implementations
//!
//! Process-local implementations of the domain repository traits, used by
//! the `memory` storage backend and throughout the test suite. They follow
//! the same error contract as the PostgreSQL repositories.

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use parking_lot::RwLock;

use crate::domain::{
    Booking, BookingRepository, Conference, ConferenceRepository, User, UserRepository,
    CONFERENCE_NOT_FOUND,
};
use super::{booking_exists, conference_exists, user_email_exists, user_id_exists};
use crate::shared::error::AppError;

/// Conference storage keyed by conference ID.
#[derive(Debug, Default)]
pub struct InMemoryConferenceRepository {
    conferences: DashMap<String, Conference>,
}

impl InMemoryConferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored conferences.
    pub fn len(&self) -> usize {
        self.conferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conferences.is_empty()
    }
}

#[async_trait]
impl ConferenceRepository for InMemoryConferenceRepository {
    async fn create(&self, conference: &Conference) -> Result<(), AppError> {
        match self.conferences.entry(conference.id.clone()) {
            Entry::Occupied(_) => Err(conference_exists(&conference.id)),
            Entry::Vacant(entry) => {
                entry.insert(conference.clone());
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Conference>, AppError> {
        Ok(self.conferences.get(id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, conference: &Conference) -> Result<(), AppError> {
        let mut stored = self
            .conferences
            .get_mut(&conference.id)
            .ok_or_else(|| AppError::NotFound(CONFERENCE_NOT_FOUND.into()))?;

        // Ownership is never transferred through an update.
        stored.title = conference.title.clone();
        stored.seats = conference.seats;
        stored.start_date = conference.start_date;
        stored.end_date = conference.end_date;

        Ok(())
    }
}

/// Booking storage in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored booking.
    pub fn all(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }

    pub fn len(&self) -> usize {
        self.bookings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.read().is_empty()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: &Booking) -> Result<(), AppError> {
        let mut bookings = self.bookings.write();
        if bookings.contains(booking) {
            return Err(booking_exists());
        }
        bookings.push(booking.clone());
        Ok(())
    }

    async fn find_by_conference_id(&self, conference_id: &str) -> Result<Vec<Booking>, AppError> {
        Ok(self
            .bookings
            .read()
            .iter()
            .filter(|booking| booking.conference_id == conference_id)
            .cloned()
            .collect())
    }

    async fn find_by_conference_id_and_user_id(
        &self,
        conference_id: &str,
        user_id: &str,
    ) -> Result<Option<Booking>, AppError> {
        Ok(self
            .bookings
            .read()
            .iter()
            .find(|booking| booking.conference_id == conference_id && booking.user_id == user_id)
            .cloned())
    }
}

/// User storage keyed by user ID.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), AppError> {
        if self
            .users
            .iter()
            .any(|entry| entry.email_address == user.email_address)
        {
            return Err(user_email_exists());
        }

        match self.users.entry(user.id.clone()) {
            Entry::Occupied(_) => Err(user_id_exists(&user.id)),
            Entry::Vacant(entry) => {
                entry.insert(user.clone());
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email_address(&self, email_address: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.email_address == email_address)
            .map(|entry| entry.value().clone()))
    }
}
