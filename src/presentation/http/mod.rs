//! HTTP Adapter
//!
//! Routes, extractors and request handlers.

pub mod extractors;
pub mod handlers;
pub mod routes;
