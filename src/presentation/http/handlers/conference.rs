//! Conference Handlers
//!
//! Translate HTTP requests into use case calls for the authenticated user.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{
    ConferenceCreatedResponse, CreateConferenceRequest, MessageResponse, UpdateDatesRequest,
    UpdateSeatsRequest,
};
use crate::application::use_cases::{
    ChangeDatesRequest, ChangeSeatsRequest, ConferenceError, Executable,
    OrganizeConferenceRequest, ReserveSeatsRequest,
};
use crate::domain::{ConferenceRepository, CONFERENCE_NOT_FOUND};
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Organize a new conference owned by the caller
pub async fn organize_conference(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ValidatedJson(body): ValidatedJson<CreateConferenceRequest>,
) -> Result<(StatusCode, Json<ConferenceCreatedResponse>), AppError> {
    let response = state
        .use_cases
        .organize_conference
        .execute(OrganizeConferenceRequest {
            user: auth.user,
            title: body.title,
            start_date: body.start_date,
            end_date: body.end_date,
            seats: body.seats,
        })
        .await?;
    metrics::record_conference_change("organized");

    Ok((StatusCode::CREATED, Json(response.into())))
}

/// Change the number of seats of a conference
pub async fn change_seats(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(conference_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateSeatsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .use_cases
        .change_seats
        .execute(ChangeSeatsRequest {
            user: auth.user,
            conference_id,
            seats: body.seats,
        })
        .await?;
    metrics::record_conference_change("seats");

    Ok(Json(MessageResponse::new(
        "The number of seats was changed correctly",
    )))
}

/// Move a conference to new dates
pub async fn change_dates(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(conference_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateDatesRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .use_cases
        .change_dates
        .execute(ChangeDatesRequest {
            user: auth.user,
            conference_id,
            start_date: body.start_date,
            end_date: body.end_date,
        })
        .await?;
    metrics::record_conference_change("dates");

    Ok(Json(MessageResponse::new(
        "The dates of the conference were changed correctly",
    )))
}

/// Book a seat of a conference for the caller
pub async fn book_seat(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(conference_id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let conference = state
        .conferences
        .find_by_id(&conference_id)
        .await?
        .ok_or_else(|| AppError::NotFound(CONFERENCE_NOT_FOUND.into()))?;

    let result = state
        .use_cases
        .reserve_seats
        .execute(ReserveSeatsRequest {
            user: auth.user,
            conference,
        })
        .await;

    match &result {
        Ok(()) => metrics::record_booking("created"),
        Err(ConferenceError::AlreadyBooked) => metrics::record_booking("duplicate"),
        Err(ConferenceError::NoSeatsLeft) => metrics::record_booking("full"),
        Err(_) => {}
    }
    result?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("The booking has been validated")),
    ))
}
