//! Authentication Module
//!
//! This module handles user accounts, password hashing, and bearer
//! tokens, along with the HTTP handlers for the auth endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - bcrypt hash/verify
//! ├── sessions.rs     - JWT issue/verify
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User login handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password + name → user created → token returned
//! 2. **Login**: email + password → credentials verified → token returned
//! 3. **Protected routes**: bearer token → auth gate resolves the user row
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs expiring after 24 hours, never revoked
//!   server-side
//! - Login failures return a single generic error (no user enumeration)

/// User data model and database operations
pub mod users;

/// Password hashing and verification
pub mod passwords;

/// Bearer token issue/verify
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, register};
