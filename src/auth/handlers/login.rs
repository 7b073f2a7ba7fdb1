/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a bearer token
 * 4. Return token and user projection
 *
 * # Security
 *
 * - A missing user and a wrong password return the same generic
 *   `Invalid credentials` error, so the response never reveals which
 *   check failed
 * - Password verification is constant-time (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::passwords::verify_password;
use crate::auth::sessions::issue_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool + config)
/// * `Json(request)` - Login request with email and password
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown email or wrong password (same error
///   shape for both)
/// * `500 Internal Server Error` - Storage or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    // Verify password
    let valid = verify_password(&request.password, &user.password_hash)
        .map_err(|e| ApiError::internal(format!("Password verification failed: {e}")))?;

    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    // Issue token
    let token = issue_token(user.id, &state.config.jwt_secret)
        .map_err(|e| ApiError::internal(format!("Failed to sign token: {e}")))?;

    tracing::info!("User logged in: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
