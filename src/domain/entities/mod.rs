//! # Domain Entities
//!
//! Core domain entities of the booking system.
//!
//! - **Conference**: An event with a seat capacity and date range, owned by its organizer
//! - **Booking**: A seat reserved by one user for one conference
//! - **User**: An account that organizes conferences and books seats
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod booking;
mod conference;
mod user;

pub use booking::{Booking, BookingRepository};

#[cfg(test)]
pub use booking::MockBookingRepository;

pub use conference::{
    Conference, ConferenceRepository, CONFERENCE_NOT_FOUND, MAX_DURATION_HOURS, MAX_SEATS,
    MIN_NOTICE_DAYS, MIN_SEATS,
};

pub use user::{User, UserRepository};
