//! Authentication Service
//!
//! Checks email/password credentials against the user store.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;

use crate::domain::{User, UserRepository};

/// Authentication service trait for dependency injection
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve the user owning the given credentials.
    async fn authenticate(&self, email_address: &str, password: &str) -> Result<User, AuthError>;
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Wrong credentials")]
    WrongCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Authenticator backed by a user repository
pub struct BasicAuthenticator<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
}

impl<U> BasicAuthenticator<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> Authenticator for BasicAuthenticator<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn authenticate(&self, email_address: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .user_repo
            .find_by_email_address(email_address)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or(AuthError::WrongCredentials)?;

        if !verify_password(password, &user.password)? {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(AuthError::WrongCredentials);
        }

        Ok(user)
    }
}
