//! Application Layer
//!
//! Contains the use cases, supporting services and data transfer objects
//! (DTOs). This layer orchestrates the flow of data between the
//! presentation and domain layers.

pub mod dto;
pub mod services;
pub mod use_cases;
