//! Repository Implementations
//!
//! Two families of implementations of the domain repository traits:
//!
//! - **PostgreSQL** (`Pg*Repository`) - the `postgres` storage backend
//! - **In-memory** (`InMemory*Repository`) - the `memory` storage backend and tests
//!
//! Both families share the same error contract: updating a missing
//! conference fails with `AppError::NotFound("Conference not found")`, and
//! inserting a duplicate conference, booking or user fails with the
//! `AppError::Conflict` built by the helpers below.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgBookingRepository, PgConferenceRepository, PgUserRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let conference_repo = PgConferenceRepository::new(pool.clone());
//!     let booking_repo = PgBookingRepository::new(pool.clone());
//!     let user_repo = PgUserRepository::new(pool);
//! }
//! ```

pub mod booking_repository;
pub mod conference_repository;
pub mod in_memory;
pub mod user_repository;

pub use booking_repository::PgBookingRepository;
pub use conference_repository::PgConferenceRepository;
pub use in_memory::{InMemoryBookingRepository, InMemoryConferenceRepository, InMemoryUserRepository};
pub use user_repository::PgUserRepository;

use crate::shared::error::AppError;

pub(crate) fn conference_exists(id: &str) -> AppError {
    AppError::Conflict(format!("Conference with id {} already exists", id))
}

pub(crate) fn booking_exists() -> AppError {
    AppError::Conflict("User already booked this conference.".to_string())
}

pub(crate) fn user_id_exists(id: &str) -> AppError {
    AppError::Conflict(format!("User with id {} already exists", id))
}

pub(crate) fn user_email_exists() -> AppError {
    AppError::Conflict("User with this email address already exists".to_string())
}
