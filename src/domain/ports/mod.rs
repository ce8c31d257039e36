//! # Ports
//!
//! Contracts for the non-storage collaborators of the use cases.

mod date_generator;
mod id_generator;
mod mailer;

pub use date_generator::DateGenerator;
pub use id_generator::IdGenerator;
pub use mailer::{Email, Mailer};

#[cfg(test)]
pub use mailer::MockMailer;
