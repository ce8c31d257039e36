//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a user account.
///
/// Users organize conferences and book seats. The booking core only ever
/// refers to them by id; the email address is used for notifications and
/// authentication.
///
/// Maps to the `users` table:
/// - id: TEXT PRIMARY KEY
/// - email_address: TEXT NOT NULL UNIQUE
/// - password: TEXT NOT NULL (argon2 PHC string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Generated identifier (primary key)
    pub id: String,

    /// Email address (unique)
    pub email_address: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        email_address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email_address: email_address.into(),
            password: password.into(),
        }
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual storage interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    async fn create(&self, user: &User) -> Result<(), AppError>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Find a user by email address.
    async fn find_by_email_address(&self, email_address: &str) -> Result<Option<User>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_not_serialized() {
        let user = User::new("alice", "alice@gmail.com", "$argon2id$secret");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], "alice");
        assert_eq!(json["email_address"], "alice@gmail.com");
        assert!(json.get("password").is_none());
    }
}
