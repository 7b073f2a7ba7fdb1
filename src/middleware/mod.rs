//! Middleware Module
//!
//! Request-processing middleware. Currently this is only the auth gate
//! that protects the cart, checkout, and current-user routes.

/// Bearer-token auth gate
pub mod auth;

pub use auth::{auth_middleware, CurrentUser};
