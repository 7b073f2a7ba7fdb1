//! PrintShop - Storefront Backend
//!
//! A small e-commerce backend for a print shop storefront: product
//! catalog, user registration/login, per-user shopping cart, and a
//! checkout handoff that formats the cart into a pre-filled WhatsApp
//! deep link.
//!
//! # Overview
//!
//! The service is an Axum HTTP server in front of a PostgreSQL store.
//! Every endpoint maps an HTTP verb onto a single store operation;
//! protected endpoints resolve the caller through a bearer-token auth
//! gate first.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - Router assembly and the /api route table
//! - **`auth`** - User accounts, password hashing, bearer tokens,
//!   auth handlers
//! - **`middleware`** - The auth gate protecting cart/checkout/me
//! - **`catalog`** - Product model, demo seed, catalog handlers
//! - **`cart`** - Per-user carts with atomic upsert semantics
//! - **`checkout`** - WhatsApp order-message handoff
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use printshop::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request middleware (auth gate)
pub mod middleware;

/// Product catalog
pub mod catalog;

/// Per-user shopping carts
pub mod cart;

/// Checkout handoff
pub mod checkout;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
