//! Use Cases
//!
//! One struct per business operation. Each exposes a single
//! [`Executable::execute`] call that reads repository state, applies the
//! booking rules, writes and optionally notifies.
//!
//! ## Available Use Cases
//!
//! - **OrganizeConference**: Create a conference owned by the caller
//! - **ReserveSeats**: Book a seat for a user
//! - **ChangeSeats**: Change the capacity of a conference
//! - **ChangeDates**: Move a conference and notify its attendees

use async_trait::async_trait;

pub mod change_dates;
pub mod change_seats;
pub mod error;
pub mod organize_conference;
pub mod reserve_seats;

#[cfg(test)]
pub(crate) mod fixtures;

pub use change_dates::{ChangeDates, ChangeDatesRequest};
pub use change_seats::{ChangeSeats, ChangeSeatsRequest};
pub use error::ConferenceError;
pub use organize_conference::{
    OrganizeConference, OrganizeConferenceRequest, OrganizeConferenceResponse,
};
pub use reserve_seats::{ReserveSeats, ReserveSeatsRequest};

/// Sender name used for every notification.
pub const MAIL_SENDER: &str = "TEDx conference";

/// A single business operation.
#[async_trait]
pub trait Executable<Request, Response>: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, ConferenceError>;
}
