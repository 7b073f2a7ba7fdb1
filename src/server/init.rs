/**
 * Server Initialization
 *
 * This module assembles the Axum application: database pool,
 * application state, and the configured router.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool and run migrations
 * 2. Build the application state from pool + config
 * 3. Create the router with all routes and layers
 *
 * Unlike services that degrade gracefully without their database, this
 * one refuses to start if the store is unreachable — every endpoint
 * maps onto a store operation, so a half-started server would serve
 * nothing but errors.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{connect_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database is unreachable or migrations cannot run.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing storefront backend");

    // Step 1: Connect the database pool and migrate
    let db_pool = connect_database(&config).await?;

    // Step 2: Build shared application state
    let app_state = AppState::new(db_pool, config);

    // Step 3: Create router with all routes
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
