//! Catalog Module
//!
//! Product catalog data and endpoints. The catalog is read-only except
//! for the demo seed, which atomically replaces the whole set.
//!
//! # Module Structure
//!
//! ```text
//! catalog/
//! ├── mod.rs      - Module exports
//! ├── products.rs - Product model and database operations
//! ├── seed.rs     - Fixed demo catalog data
//! └── handlers.rs - HTTP handlers (list, get, seed)
//! ```

/// Product model and database operations
pub mod products;

/// Fixed demo catalog
pub mod seed;

/// HTTP handlers for catalog endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_product, get_products, seed_products};
pub use products::{Product, ProductResponse};
