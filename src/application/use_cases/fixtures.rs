//! Shared test data for the use case tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{Conference, User};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn john_doe() -> User {
    User::new("john-doe", "johndoe@gmail.com", "qwerty")
}

pub fn bob() -> User {
    User::new("bob", "bob@gmail.com", "qwerty")
}

pub fn alice() -> User {
    User::new("alice", "alice@gmail.com", "qwerty")
}

/// A numbered attendee, distinct from the named users.
pub fn attendee(i: usize) -> User {
    User::new(format!("id-{i}"), format!("user{i}@gmail.com"), "qwerty")
}

/// 50-seat conference organized by John Doe, ten days after [`now`].
pub fn conference1() -> Conference {
    let start = now() + Duration::days(10);
    Conference {
        id: "id-1".to_string(),
        organizer_id: john_doe().id,
        title: "My first conference".to_string(),
        seats: 50,
        start_date: start,
        end_date: start + Duration::hours(2),
    }
}

/// 20-seat conference organized by John Doe.
pub fn small_conference() -> Conference {
    Conference {
        id: "id-small".to_string(),
        title: "Title".to_string(),
        seats: 20,
        ..conference1()
    }
}
