/**
 * Session Tokens
 *
 * This module issues and verifies the JWT bearer tokens that bind a
 * request to a user identity.
 *
 * # Token Shape
 *
 * Tokens are HS256-signed JWTs carrying a `user_id` claim and an `exp`
 * claim 24 hours out. They are self-contained: verification needs only
 * the signing secret, and there is no server-side revocation.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime in hours
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token is bound to
    pub user_id: Uuid,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Token verification failure
///
/// Expiry is distinguished from every other failure mode so the caller
/// can report it; both map to a 401 at the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Token signature is valid but `exp` has passed
    #[error("Token expired")]
    Expired,
    /// Signature check failed or the token is structurally malformed
    #[error("Invalid token")]
    Invalid,
}

/// Issue a signed token for a user
///
/// # Arguments
/// * `user_id` - User ID to bind the token to
/// * `secret` - HMAC signing secret
///
/// # Returns
/// Encoded JWT string, or an error if signing fails
pub fn issue_token(user_id: Uuid, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as u64;

    let claims = Claims { user_id, exp };
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), &claims, &key)
}

/// Verify a token and extract the bound user ID
///
/// Checks the HS256 signature and the `exp` claim.
///
/// # Errors
/// * `TokenError::Expired` - signature is valid but the token has expired
/// * `TokenError::Invalid` - bad signature or malformed token
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|err| {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    })?;

    Ok(token_data.claims.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECRET: &str = "unit-test-signing-secret";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET).unwrap();

        assert_eq!(verify_token(&token, SECRET), Ok(user_id));
    }

    #[test]
    fn test_expired_token() {
        // Encode claims whose exp is an hour in the past, well beyond
        // the default validation leeway.
        let claims = Claims {
            user_id: Uuid::new_v4(),
            exp: (Utc::now() - Duration::hours(1)).timestamp() as u64,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(verify_token(&token, SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = issue_token(Uuid::new_v4(), SECRET).unwrap();
        assert_eq!(
            verify_token(&token, "a-different-secret"),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let token = issue_token(Uuid::new_v4(), SECRET).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert_eq!(verify_token(&tampered, SECRET), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert_eq!(
            verify_token("not.a.token", SECRET),
            Err(TokenError::Invalid)
        );
    }
}
