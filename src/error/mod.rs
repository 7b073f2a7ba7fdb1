//! API Error Module
//!
//! This module defines the error taxonomy for the storefront API and
//! its conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! - `NotFound` (404) - missing product
//! - `DuplicateEmail` (400) - registration with a taken email
//! - `InvalidCredentials` (401) - login failure, intentionally generic
//! - `Unauthorized` (401) - missing/expired/invalid token, dangling user
//! - `EmptyCart` (400) - checkout with no items
//! - `Validation` (400) - request body failed boundary checks
//! - `Storage` (500) - underlying store failure
//! - `Internal` (500) - hashing/signing faults

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
