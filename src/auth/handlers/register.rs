/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate the email format
 * 2. Check that no user exists with this email
 * 3. Hash the password using bcrypt
 * 4. Create the user in the database
 * 5. Issue a bearer token
 * 6. Return token and user projection
 *
 * # Security
 *
 * - Passwords are hashed with a fresh salt before storage
 * - Password hashes are never returned in responses
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::passwords::hash_password;
use crate::auth::sessions::issue_token;
use crate::auth::users::{create_user, get_user_by_email, is_unique_violation};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Registration handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool + config)
/// * `Json(request)` - Registration request with email, password, name
///
/// # Errors
///
/// * `400 Bad Request` - Email is malformed or already registered
/// * `500 Internal Server Error` - Hashing, storage, or signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Registration request for: {}", request.email);

    // Validate email format (basic check)
    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::validation("Invalid email format"));
    }

    // Check if email already exists
    if get_user_by_email(&state.db_pool, &request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::DuplicateEmail);
    }

    // Hash password
    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::internal(format!("Failed to hash password: {e}")))?;

    // Create user. A registration racing past the precondition lookup
    // lands on the UNIQUE email constraint instead of a storage failure.
    let user = create_user(&state.db_pool, request.email, request.name, password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::DuplicateEmail
            } else {
                ApiError::Storage(e)
            }
        })?;

    // Issue token
    let token = issue_token(user.id, &state.config.jwt_secret)
        .map_err(|e| ApiError::internal(format!("Failed to sign token: {e}")))?;

    tracing::info!("User created: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
