//! # Configuration Module
//!
//! Settings are layered from:
//! - Built-in defaults (in-memory storage, log mailer, booking notifications off)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//! - Environment variables (prefixed with APP__, plus SERVER_HOST, SERVER_PORT,
//!   DATABASE_URL and STORAGE_BACKEND)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use conference_booking::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
