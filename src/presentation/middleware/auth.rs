//! Authentication Middleware
//!
//! HTTP Basic authentication for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};

use crate::application::services::{AuthError, Authenticator};
use crate::domain::User;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated user extension
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

/// Authentication middleware that checks Basic credentials against the user store
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Authorization(credentials) = request
        .headers()
        .typed_get::<Authorization<Basic>>()
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    let user = state
        .authenticator
        .authenticate(credentials.username(), credentials.password())
        .await
        .map_err(|e| match e {
            AuthError::WrongCredentials => {
                tracing::debug!(email_address = %credentials.username(), "Authentication failed");
                AppError::Unauthorized(AuthError::WrongCredentials.to_string())
            }
            AuthError::Internal(msg) => AppError::Internal(msg),
        })?;

    request.extensions_mut().insert(AuthUser { user });

    Ok(next.run(request).await)
}
