/**
 * Router Configuration
 *
 * This module assembles the full Axum router: the `/api` route table,
 * the health probe, the CORS layer, request tracing, and the 404
 * fallback.
 *
 * # Route Order
 *
 * 1. API routes under the `/api` prefix
 * 2. `GET /health` liveness probe
 * 3. Fallback handler for unknown paths
 */

use axum::{
    http::{header, HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Liveness probe handler
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Build the CORS layer from configured origins
///
/// The storefront sends credentialed requests, and a credentialed
/// response cannot use the `*` wildcard — so "allow all" reflects the
/// request origin instead.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    if config.allow_any_origin() {
        cors.allow_origin(AllowOrigin::mirror_request())
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool + config)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .nest("/api", configure_api_routes(app_state.clone()))
        .route("/health", get(health))
        .fallback(|| async { "404 Not Found" })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
