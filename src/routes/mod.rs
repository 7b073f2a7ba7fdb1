//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Full router assembly (layers, health, fallback)
//! └── api_routes.rs - /api route table
//! ```

/// Router assembly
pub mod router;

/// API route table
pub mod api_routes;

pub use router::create_router;
