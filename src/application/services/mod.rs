//! Application Services
//!
//! Services supporting the use cases.
//!
//! ## Available Services
//!
//! - **BasicAuthenticator**: Email/password authentication against the user store

pub mod authenticator;

pub use authenticator::{hash_password, verify_password, AuthError, Authenticator, BasicAuthenticator};
