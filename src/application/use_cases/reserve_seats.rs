//! Reserve Seats
//!
//! Books one seat of a conference for a user, refusing double bookings and
//! bookings past capacity.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ConferenceError, Executable, MAIL_SENDER};
use crate::domain::{Booking, BookingRepository, Conference, Email, Mailer, User, UserRepository};
use crate::shared::error::AppError;

/// Reserve seats request
#[derive(Debug, Clone)]
pub struct ReserveSeatsRequest {
    pub user: User,
    pub conference: Conference,
}

/// ReserveSeats use case
///
/// Confirmation emails to the attendee and the organizer are only sent when
/// `notify_on_booking` is enabled.
pub struct ReserveSeats<B, U, M>
where
    B: BookingRepository + ?Sized,
    U: UserRepository + ?Sized,
    M: Mailer + ?Sized,
{
    booking_repo: Arc<B>,
    user_repo: Arc<U>,
    mailer: Arc<M>,
    notify_on_booking: bool,
    sender: String,
}

impl<B, U, M> ReserveSeats<B, U, M>
where
    B: BookingRepository + ?Sized,
    U: UserRepository + ?Sized,
    M: Mailer + ?Sized,
{
    pub fn new(booking_repo: Arc<B>, user_repo: Arc<U>, mailer: Arc<M>) -> Self {
        Self {
            booking_repo,
            user_repo,
            mailer,
            notify_on_booking: false,
            sender: MAIL_SENDER.to_string(),
        }
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notify_on_booking = enabled;
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    async fn send_confirmation_emails(&self, user: &User, conference: &Conference) {
        let to_attendee = Email {
            from: self.sender.clone(),
            to: user.email_address.clone(),
            subject: "Booking conference confirmation".to_string(),
            body: format!(
                "We confirm you that the booking of the conference {} has been accepted.",
                conference.title
            ),
        };
        if let Err(e) = self.mailer.send(to_attendee).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to send booking confirmation");
        }

        let organizer = match self.user_repo.find_by_id(&conference.organizer_id).await {
            Ok(Some(organizer)) => organizer,
            Ok(None) => {
                tracing::warn!(
                    organizer_id = %conference.organizer_id,
                    "Organizer not found, skipping booking notification"
                );
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load organizer");
                return;
            }
        };

        let to_organizer = Email {
            from: self.sender.clone(),
            to: organizer.email_address,
            subject: "Booking conference confirmation".to_string(),
            body: format!("A new user just booked the conference {}", conference.title),
        };
        if let Err(e) = self.mailer.send(to_organizer).await {
            tracing::warn!(organizer_id = %organizer.id, error = %e, "Failed to notify organizer");
        }
    }
}

#[async_trait]
impl<B, U, M> Executable<ReserveSeatsRequest, ()> for ReserveSeats<B, U, M>
where
    B: BookingRepository + ?Sized + 'static,
    U: UserRepository + ?Sized + 'static,
    M: Mailer + ?Sized + 'static,
{
    async fn execute(&self, request: ReserveSeatsRequest) -> Result<(), ConferenceError> {
        let ReserveSeatsRequest { user, conference } = request;

        let bookings = self
            .booking_repo
            .find_by_conference_id(&conference.id)
            .await?;

        if bookings.iter().any(|booking| booking.user_id == user.id) {
            tracing::debug!(user_id = %user.id, conference_id = %conference.id, "Duplicate booking rejected");
            return Err(ConferenceError::AlreadyBooked);
        }

        if bookings.len() >= usize::try_from(conference.seats).unwrap_or(0) {
            tracing::debug!(conference_id = %conference.id, seats = conference.seats, "Conference is full");
            return Err(ConferenceError::NoSeatsLeft);
        }

        self.booking_repo
            .create(&Booking::new(user.id.clone(), conference.id.clone()))
            .await
            .map_err(|e| match e {
                // lost a race against a concurrent booking of the same user
                AppError::Conflict(_) => ConferenceError::AlreadyBooked,
                e => e.into(),
            })?;

        tracing::info!(user_id = %user.id, conference_id = %conference.id, "Seat reserved");

        if self.notify_on_booking {
            self.send_confirmation_emails(&user, &conference).await;
        }

        Ok(())
    }
}
