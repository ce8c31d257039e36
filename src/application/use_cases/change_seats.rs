//! Change Seats
//!
//! Lets the organizer change the capacity of a conference.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ConferenceError, Executable};
use crate::domain::{BookingRepository, ConferenceRepository, User, MAX_SEATS, MIN_SEATS};

/// Change seats request
#[derive(Debug, Clone)]
pub struct ChangeSeatsRequest {
    pub user: User,
    pub conference_id: String,
    pub seats: i32,
}

/// ChangeSeats use case
pub struct ChangeSeats<C, B>
where
    C: ConferenceRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    conference_repo: Arc<C>,
    booking_repo: Arc<B>,
}

impl<C, B> ChangeSeats<C, B>
where
    C: ConferenceRepository + ?Sized,
    B: BookingRepository + ?Sized,
{
    pub fn new(conference_repo: Arc<C>, booking_repo: Arc<B>) -> Self {
        Self {
            conference_repo,
            booking_repo,
        }
    }
}

#[async_trait]
impl<C, B> Executable<ChangeSeatsRequest, ()> for ChangeSeats<C, B>
where
    C: ConferenceRepository + ?Sized + 'static,
    B: BookingRepository + ?Sized + 'static,
{
    async fn execute(&self, request: ChangeSeatsRequest) -> Result<(), ConferenceError> {
        let conference = self
            .conference_repo
            .find_by_id(&request.conference_id)
            .await?
            .ok_or(ConferenceError::NotFound)?;

        if !conference.is_organizer(&request.user.id) {
            tracing::debug!(
                user_id = %request.user.id,
                conference_id = %conference.id,
                "Seat change refused to non-organizer"
            );
            return Err(ConferenceError::Forbidden);
        }

        if request.seats > MAX_SEATS || request.seats < MIN_SEATS {
            return Err(ConferenceError::validation(format!(
                "The conference must have a maximum of {} seats and minimum of {} seats",
                MAX_SEATS, MIN_SEATS
            )));
        }

        let bookings = self
            .booking_repo
            .find_by_conference_id(&conference.id)
            .await?;

        if bookings.len() > request.seats as usize {
            return Err(ConferenceError::validation(
                "The conference has more booking than seats you try to set.",
            ));
        }

        self.conference_repo
            .update(&conference.with_seats(request.seats))
            .await?;

        tracing::info!(
            conference_id = %conference.id,
            from = conference.seats,
            to = request.seats,
            "Conference seats changed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::fixtures::{attendee, bob, conference1, john_doe};
    use crate::domain::Booking;
    use crate::infrastructure::repositories::{
        InMemoryBookingRepository, InMemoryConferenceRepository,
    };
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const BOUNDS_MESSAGE: &str =
        "The conference must have a maximum of 1000 seats and minimum of 20 seats";

    struct Harness {
        conferences: Arc<InMemoryConferenceRepository>,
        bookings: Arc<InMemoryBookingRepository>,
        use_case: ChangeSeats<InMemoryConferenceRepository, InMemoryBookingRepository>,
    }

    async fn harness() -> Harness {
        let conferences = Arc::new(InMemoryConferenceRepository::new());
        conferences.create(&conference1()).await.unwrap();
        let bookings = Arc::new(InMemoryBookingRepository::new());
        let use_case = ChangeSeats::new(conferences.clone(), bookings.clone());

        Harness {
            conferences,
            bookings,
            use_case,
        }
    }

    fn request(user: User, conference_id: &str, seats: i32) -> ChangeSeatsRequest {
        ChangeSeatsRequest {
            user,
            conference_id: conference_id.to_string(),
            seats,
        }
    }

    async fn stored_seats(h: &Harness) -> i32 {
        h.conferences
            .find_by_id(&conference1().id)
            .await
            .unwrap()
            .unwrap()
            .seats
    }

    #[tokio::test]
    async fn test_changes_number_of_seats() {
        let h = harness().await;

        h.use_case
            .execute(request(john_doe(), "id-1", 100))
            .await
            .unwrap();

        let stored = h.conferences.find_by_id("id-1").await.unwrap().unwrap();
        assert_eq!(stored, conference1().with_seats(100));
    }

    #[tokio::test]
    async fn test_unknown_conference() {
        let h = harness().await;

        let error = h
            .use_case
            .execute(request(john_doe(), "non-existing-id", 100))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Conference not found");
        assert_eq!(stored_seats(&h).await, 50);
    }

    #[tokio::test]
    async fn test_conference_of_someone_else() {
        let h = harness().await;

        let error = h
            .use_case
            .execute(request(bob(), "id-1", 100))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "You are not allowed to update this conference");
        assert_eq!(stored_seats(&h).await, 50);
    }

    #[test_case(1001 ; "above maximum")]
    #[test_case(15 ; "below minimum")]
    #[test_case(0 ; "zero")]
    #[tokio::test]
    async fn test_seats_out_of_bounds(seats: i32) {
        let h = harness().await;

        let error = h
            .use_case
            .execute(request(john_doe(), "id-1", seats))
            .await
            .unwrap_err();

        assert!(matches!(error, ConferenceError::Validation(_)));
        assert_eq!(error.to_string(), BOUNDS_MESSAGE);
        assert_eq!(stored_seats(&h).await, 50);
    }

    #[test_case(20 ; "minimum")]
    #[test_case(1000 ; "maximum")]
    #[tokio::test]
    async fn test_seats_on_bounds(seats: i32) {
        let h = harness().await;

        h.use_case
            .execute(request(john_doe(), "id-1", seats))
            .await
            .unwrap();

        assert_eq!(stored_seats(&h).await, seats);
    }

    #[tokio::test]
    async fn test_fewer_seats_than_bookings() {
        let h = harness().await;
        for i in 0..21 {
            h.bookings
                .create(&Booking::new(attendee(i).id, "id-1"))
                .await
                .unwrap();
        }

        let error = h
            .use_case
            .execute(request(john_doe(), "id-1", 20))
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "The conference has more booking than seats you try to set."
        );
        assert_eq!(stored_seats(&h).await, 50);
    }

    #[tokio::test]
    async fn test_bounds_checked_before_bookings() {
        let h = harness().await;

        let error = h
            .use_case
            .execute(request(john_doe(), "id-1", 15))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), BOUNDS_MESSAGE);
    }

    #[tokio::test]
    async fn test_as_many_seats_as_bookings() {
        let h = harness().await;
        for i in 0..25 {
            h.bookings
                .create(&Booking::new(attendee(i).id, "id-1"))
                .await
                .unwrap();
        }

        h.use_case
            .execute(request(john_doe(), "id-1", 25))
            .await
            .unwrap();

        assert_eq!(stored_seats(&h).await, 25);
    }
}
