/**
 * Authentication Middleware
 *
 * This module provides the auth gate for routes that require a logged-in
 * user. It extracts the bearer token from the Authorization header,
 * verifies it, and resolves the bound user from the credential store.
 *
 * Every protected call re-resolves the user row; there is no caching of
 * lookups. A valid token whose user no longer exists is rejected the
 * same way as an invalid token.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::verify_token;
use crate::auth::users::{get_user_by_id, User};
use crate::error::ApiError;
use crate::server::state::AppState;

/// The authenticated user resolved by the auth gate
///
/// Inserted into request extensions by `auth_middleware` and extracted
/// in handlers as a parameter.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token signature and expiry
/// 3. Resolves the user row from the credential store
/// 4. Attaches the user to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing, malformed,
/// expired, invalid, or bound to a user that does not exist.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Missing authorization header")
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthorized("Invalid authorization header format")
    })?;

    // Verify token — expiry and signature failures carry distinct
    // detail messages but both surface as 401
    let user_id = verify_token(token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        ApiError::unauthorized(e.to_string())
    })?;

    // Resolve the user. Users are never deleted today, but a dangling
    // reference still maps to 401 rather than a server fault.
    let user = get_user_by_id(&state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token bound to unknown user: {}", user_id);
            ApiError::unauthorized("User not found")
        })?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

impl axum::extract::FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentUser not found in request extensions");
            ApiError::unauthorized("Missing authorization header")
        })
    }
}
