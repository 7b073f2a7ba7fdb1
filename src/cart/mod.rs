//! Cart Module
//!
//! Per-user shopping carts. Each user owns at most one cart; writes are
//! atomic create-or-replace operations keyed on the user id, and the
//! total is always recomputed server-side from the submitted items.
//!
//! # Module Structure
//!
//! ```text
//! cart/
//! ├── mod.rs      - Module exports
//! ├── carts.rs    - Cart model, total computation, store operations
//! └── handlers.rs - HTTP handlers (upsert, get, clear)
//! ```

/// Cart model and database operations
pub mod carts;

/// HTTP handlers for cart endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use carts::{compute_total, Cart, CartItem};
pub use handlers::{clear_cart, create_or_update_cart, get_cart, CartCreate, CartResponse};
