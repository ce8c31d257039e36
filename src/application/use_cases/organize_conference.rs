//! Organize Conference
//!
//! Creates a new conference owned by the caller.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::change_dates::{check_duration, check_start};
use super::{ConferenceError, Executable};
use crate::domain::{
    Conference, ConferenceRepository, DateGenerator, IdGenerator, User, MAX_SEATS, MIN_SEATS,
};

/// Organize conference request
#[derive(Debug, Clone)]
pub struct OrganizeConferenceRequest {
    pub user: User,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// Identifier of the created conference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeConferenceResponse {
    pub id: String,
}

/// OrganizeConference use case
pub struct OrganizeConference<C, I, D>
where
    C: ConferenceRepository + ?Sized,
    I: IdGenerator + ?Sized,
    D: DateGenerator + ?Sized,
{
    conference_repo: Arc<C>,
    id_generator: Arc<I>,
    date_generator: Arc<D>,
}

impl<C, I, D> OrganizeConference<C, I, D>
where
    C: ConferenceRepository + ?Sized,
    I: IdGenerator + ?Sized,
    D: DateGenerator + ?Sized,
{
    pub fn new(conference_repo: Arc<C>, id_generator: Arc<I>, date_generator: Arc<D>) -> Self {
        Self {
            conference_repo,
            id_generator,
            date_generator,
        }
    }

    fn validate(conference: &Conference, now: DateTime<Utc>) -> Result<(), ConferenceError> {
        check_start(conference, now)?;
        if conference.has_too_many_seats() {
            return Err(ConferenceError::validation(format!(
                "The conference must have a maximum of {} seats",
                MAX_SEATS
            )));
        }
        if conference.has_not_enough_seats() {
            return Err(ConferenceError::validation(format!(
                "The conference must have at least {} seats",
                MIN_SEATS
            )));
        }
        check_duration(conference)
    }
}

#[async_trait]
impl<C, I, D> Executable<OrganizeConferenceRequest, OrganizeConferenceResponse>
    for OrganizeConference<C, I, D>
where
    C: ConferenceRepository + ?Sized + 'static,
    I: IdGenerator + ?Sized + 'static,
    D: DateGenerator + ?Sized + 'static,
{
    async fn execute(
        &self,
        request: OrganizeConferenceRequest,
    ) -> Result<OrganizeConferenceResponse, ConferenceError> {
        let conference = Conference {
            id: self.id_generator.generate(),
            organizer_id: request.user.id,
            title: request.title,
            seats: request.seats,
            start_date: request.start_date,
            end_date: request.end_date,
        };

        Self::validate(&conference, self.date_generator.now())?;

        self.conference_repo.create(&conference).await?;

        tracing::info!(
            conference_id = %conference.id,
            organizer_id = %conference.organizer_id,
            seats = conference.seats,
            "Conference organized"
        );

        Ok(OrganizeConferenceResponse { id: conference.id })
    }
}
