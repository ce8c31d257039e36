//! Change Dates
//!
//! Lets the organizer move a conference, then tells every attendee.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{ConferenceError, Executable, MAIL_SENDER};
use crate::domain::{
    BookingRepository, Conference, ConferenceRepository, DateGenerator, Email, Mailer, User,
    UserRepository,
};

/// Change dates request
#[derive(Debug, Clone)]
pub struct ChangeDatesRequest {
    pub user: User,
    pub conference_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// ChangeDates use case
pub struct ChangeDates<C, D, B, M, U>
where
    C: ConferenceRepository + ?Sized,
    D: DateGenerator + ?Sized,
    B: BookingRepository + ?Sized,
    M: Mailer + ?Sized,
    U: UserRepository + ?Sized,
{
    conference_repo: Arc<C>,
    date_generator: Arc<D>,
    booking_repo: Arc<B>,
    mailer: Arc<M>,
    user_repo: Arc<U>,
    sender: String,
}

impl<C, D, B, M, U> ChangeDates<C, D, B, M, U>
where
    C: ConferenceRepository + ?Sized,
    D: DateGenerator + ?Sized,
    B: BookingRepository + ?Sized,
    M: Mailer + ?Sized,
    U: UserRepository + ?Sized,
{
    pub fn new(
        conference_repo: Arc<C>,
        date_generator: Arc<D>,
        booking_repo: Arc<B>,
        mailer: Arc<M>,
        user_repo: Arc<U>,
    ) -> Self {
        Self {
            conference_repo,
            date_generator,
            booking_repo,
            mailer,
            user_repo,
            sender: MAIL_SENDER.to_string(),
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Emails every user holding a booking. Lookup failures, unknown users
    /// and failed sends are logged and skipped.
    async fn notify_attendees(&self, conference: &Conference) {
        let bookings = match self.booking_repo.find_by_conference_id(&conference.id).await {
            Ok(bookings) => bookings,
            Err(e) => {
                tracing::warn!(conference_id = %conference.id, error = %e, "Failed to load attendees, nobody notified");
                return;
            }
        };

        for booking in bookings {
            let user = match self.user_repo.find_by_id(&booking.user_id).await {
                Ok(Some(user)) => user,
                Ok(None) => {
                    tracing::warn!(user_id = %booking.user_id, "Booked user not found, skipping notification");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(user_id = %booking.user_id, error = %e, "Failed to load booked user");
                    continue;
                }
            };

            let email = Email {
                from: self.sender.clone(),
                to: user.email_address,
                subject: "The dates of the conference have changed".to_string(),
                body: format!("The dates of the conference : {} have changed", conference.title),
            };

            if let Err(e) = self.mailer.send(email).await {
                tracing::warn!(user_id = %user.id, error = %e, "Failed to notify attendee");
            }
        }
    }
}

/// The conference must end after it starts and start at least three days
/// after `now`.
pub(crate) fn check_start(conference: &Conference, now: DateTime<Utc>) -> Result<(), ConferenceError> {
    if !conference.has_valid_range() {
        return Err(ConferenceError::validation(
            "The end date must be after the start date",
        ));
    }
    if conference.is_too_close(now) {
        return Err(ConferenceError::validation(
            "The conference must happen in at least 3 days",
        ));
    }
    Ok(())
}

pub(crate) fn check_duration(conference: &Conference) -> Result<(), ConferenceError> {
    if conference.is_too_long() {
        return Err(ConferenceError::validation(
            "The conference is too long (> 3 hours)",
        ));
    }
    Ok(())
}

#[async_trait]
impl<C, D, B, M, U> Executable<ChangeDatesRequest, ()> for ChangeDates<C, D, B, M, U>
where
    C: ConferenceRepository + ?Sized + 'static,
    D: DateGenerator + ?Sized + 'static,
    B: BookingRepository + ?Sized + 'static,
    M: Mailer + ?Sized + 'static,
    U: UserRepository + ?Sized + 'static,
{
    async fn execute(&self, request: ChangeDatesRequest) -> Result<(), ConferenceError> {
        let conference = self
            .conference_repo
            .find_by_id(&request.conference_id)
            .await?
            .ok_or(ConferenceError::NotFound)?;

        if !conference.is_organizer(&request.user.id) {
            tracing::debug!(
                user_id = %request.user.id,
                conference_id = %conference.id,
                "Date change refused to non-organizer"
            );
            return Err(ConferenceError::Forbidden);
        }

        let updated = conference.with_dates(request.start_date, request.end_date);
        check_start(&updated, self.date_generator.now())?;
        check_duration(&updated)?;

        self.conference_repo.update(&updated).await?;

        tracing::info!(
            conference_id = %updated.id,
            start_date = %updated.start_date,
            end_date = %updated.end_date,
            "Conference dates changed"
        );

        self.notify_attendees(&updated).await;

        Ok(())
    }
}
