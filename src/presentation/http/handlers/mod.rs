//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod conference;
pub mod health;
