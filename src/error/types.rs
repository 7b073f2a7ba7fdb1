/**
 * API Error Types
 *
 * This module defines the error taxonomy for the storefront API.
 * Every handler returns `Result<_, ApiError>`; the error is converted
 * to a JSON HTTP response in the conversion module.
 *
 * # Error Categories
 *
 * - Client errors: missing products, duplicate registration, bad
 *   credentials, empty cart at checkout, failed boundary validation
 * - Auth errors: missing/expired/invalid bearer tokens, dangling user
 *   references
 * - Server errors: storage failures and internal faults (hashing,
 *   token signing)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Storefront API error
///
/// Each variant maps to a fixed HTTP status code and carries a
/// human-readable detail message. Errors are never retried or recovered
/// locally; they surface directly to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested entity does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Name of the missing entity (e.g. "Product")
        resource: String,
    },

    /// Registration attempted with an email that is already taken
    #[error("Email already registered")]
    DuplicateEmail,

    /// Login failed — intentionally generic
    ///
    /// A missing user and a wrong password both produce this variant so
    /// the response never reveals which check failed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, expired, invalid, or bound to a user that
    /// no longer exists
    #[error("{message}")]
    Unauthorized {
        /// Human-readable detail message
        message: String,
    },

    /// Checkout attempted with no items in the cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Request body failed boundary validation
    #[error("{message}")]
    Validation {
        /// Human-readable detail message
        message: String,
    },

    /// Underlying store operation failed
    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    /// Internal fault (password hashing, token signing)
    #[error("Internal server error")]
    Internal {
        /// Detail kept for logs, not exposed in the message
        message: String,
    },
}

impl ApiError {
    /// Create a `NotFound` error for the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an `Unauthorized` error with a detail message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a `Validation` error with a detail message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an `Internal` error with a detail message
    ///
    /// The detail is logged but the HTTP response carries a generic
    /// message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::EmptyCart => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = ApiError::not_found("Product");
        assert_eq!(error.to_string(), "Product not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_email_is_bad_request() {
        assert_eq!(
            ApiError::DuplicateEmail.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::DuplicateEmail.to_string(), "Email already registered");
    }

    #[test]
    fn test_credential_errors_are_unauthorized() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::unauthorized("Token expired").status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_empty_cart_is_bad_request() {
        assert_eq!(ApiError::EmptyCart.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_internal_message_is_generic() {
        let error = ApiError::internal("bcrypt blew up");
        assert_eq!(error.to_string(), "Internal server error");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_carries_detail() {
        let error = ApiError::validation("quantity must be at least 1");
        assert_eq!(error.to_string(), "quantity must be at least 1");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }
}
