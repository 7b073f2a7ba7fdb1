//! Authentication HTTP Handlers
//!
//! Handlers for the authentication endpoints:
//!
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /api/auth/me` - Current user projection (requires auth gate)

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

/// Current user handler
pub mod me;

// Re-export handlers for route configuration
pub use login::login;
pub use me::get_me;
pub use register::register;
