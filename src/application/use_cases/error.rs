//! Use case errors.

use crate::shared::error::AppError;

/// Errors raised by the conference use cases.
///
/// The display strings are part of the API: they are returned verbatim to
/// HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ConferenceError {
    #[error("Conference not found")]
    NotFound,

    #[error("You are not allowed to update this conference")]
    Forbidden,

    #[error("{0}")]
    Validation(String),

    #[error("User already booked this conference.")]
    AlreadyBooked,

    #[error("The conference has no more seats left.")]
    NoSeatsLeft,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConferenceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<AppError> for ConferenceError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::NotFound(_) => ConferenceError::NotFound,
            e => ConferenceError::Internal(e.to_string()),
        }
    }
}

impl From<ConferenceError> for AppError {
    fn from(error: ConferenceError) -> Self {
        let message = error.to_string();
        match error {
            ConferenceError::NotFound => AppError::NotFound(message),
            ConferenceError::Forbidden => AppError::Forbidden(message),
            ConferenceError::Validation(_) => AppError::Validation(message),
            ConferenceError::AlreadyBooked | ConferenceError::NoSeatsLeft => {
                AppError::Conflict(message)
            }
            ConferenceError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
