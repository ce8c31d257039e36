//! ID and Date Generators
//!
//! Implementations of the `IdGenerator` and `DateGenerator` ports.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::domain::{DateGenerator, IdGenerator};

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Always returns the same identifier. Useful for tests and fixtures.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    id: String,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.id.clone()
    }
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentDateGenerator;

impl DateGenerator for CurrentDateGenerator {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedDateGenerator {
    now: Mutex<DateTime<Utc>>,
}

impl FixedDateGenerator {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }
}

impl DateGenerator for FixedDateGenerator {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
