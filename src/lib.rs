//! # Conference Booking Library
//!
//! This crate provides a conference organization and seat booking backend:
//! - Organizers create conferences, change their capacity and move their dates
//! - Users book seats, at most one per conference, within capacity
//! - Attendees are emailed when a conference they booked moves
//! - RESTful HTTP API protected by Basic authentication
//! - In-memory or PostgreSQL storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities, booking rules and port traits
//! - **Application Layer**: Use cases, authentication and DTOs
//! - **Infrastructure Layer**: Repository, mailer and generator adapters
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! conference_booking/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository and port traits
//! +-- application/    Use cases, services and DTOs
//! +-- infrastructure/ Storage, mail, generators and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and wiring
pub mod startup;

// Telemetry and observability
pub mod telemetry;
