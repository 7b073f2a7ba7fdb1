/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which
 * returns the projection of the currently authenticated user.
 *
 * The heavy lifting (token verification, user resolution) happens in
 * the auth middleware; this handler only projects the resolved user.
 */

use axum::response::Json;

use crate::auth::handlers::types::UserResponse;
use crate::middleware::auth::CurrentUser;

/// Get current user handler
///
/// Returns the user resolved by the auth gate, without sensitive data.
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}
