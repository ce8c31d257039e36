//! Clock port.

use chrono::{DateTime, Utc};

/// Source of the current date, injected so date rules can be tested.
pub trait DateGenerator: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
