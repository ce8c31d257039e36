//! # Domain Layer
//!
//! The domain layer contains the core business rules of the booking system.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Conference, Booking, User) and their repository traits
//! - **ports**: Contracts for the collaborators the use cases rely on (mailer, ID and date generators)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository and port traits define the contracts adapters implement

pub mod entities;
pub mod ports;

// Re-export commonly used types
pub use entities::*;
pub use ports::*;
