/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container: the database connection
 * pool and the immutable configuration, both created once at startup.
 * There are no process-wide globals; components receive what they need
 * through this struct.
 *
 * # Thread Safety
 *
 * `PgPool` is internally synchronized and cheap to clone; the config is
 * shared behind an `Arc`. Cloning `AppState` per request is the
 * intended usage.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::AppConfig;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// Initialized once at startup and held for the process lifetime.
    /// The pool manages its own internal locking.
    pub db_pool: PgPool,

    /// Immutable server configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create application state from its startup components
    pub fn new(db_pool: PgPool, config: AppConfig) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
        }
    }
}

/// Allow handlers that only touch the store to extract `State<PgPool>`
/// without taking the whole `AppState`.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow extraction of the shared configuration.
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
