//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::use_cases::OrganizeConferenceResponse;

/// Conference created response
#[derive(Debug, Serialize)]
pub struct ConferenceCreatedResponse {
    pub id: String,
}

impl From<OrganizeConferenceResponse> for ConferenceCreatedResponse {
    fn from(response: OrganizeConferenceResponse) -> Self {
        Self { id: response.id }
    }
}

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
