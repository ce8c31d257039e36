//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (PostgreSQL) and their in-memory counterparts
//! - Mailers
//! - ID and date generators
//! - Prometheus metrics

pub mod database;
pub mod generators;
pub mod mailer;
pub mod metrics;
pub mod repositories;
