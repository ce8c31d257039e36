//! Request DTOs
//!
//! Data structures for API request bodies.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Create conference request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConferenceRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub seats: i32,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,
}

/// Change seats request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSeatsRequest {
    pub seats: i32,
}

/// Change dates request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDatesRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
