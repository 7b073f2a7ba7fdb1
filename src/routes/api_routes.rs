/**
 * API Route Table
 *
 * This module defines the route table mounted under the `/api` prefix.
 *
 * # Routes
 *
 * ## Public
 * - `GET /api/` - API banner
 * - `GET /api/products` - List products (optional `?category=` filter)
 * - `GET /api/products/{product_id}` - Single product
 * - `POST /api/products/seed` - Replace catalog with the demo set
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Protected (bearer token, auth gate)
 * - `GET /api/auth/me` - Current user projection
 * - `POST /api/cart` - Create or replace the caller's cart
 * - `GET /api/cart` - Fetch the caller's cart
 * - `DELETE /api/cart` - Clear the caller's cart
 * - `POST /api/checkout/whatsapp` - Checkout handoff link
 */

use axum::{
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::auth::{get_me, login, register};
use crate::cart::{clear_cart, create_or_update_cart, get_cart};
use crate::catalog::{get_product, get_products, seed_products};
use crate::checkout::whatsapp_checkout;
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// API banner handler
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Print Shop Storefront API",
    }))
}

/// Build the `/api` route table
///
/// Protected routes sit behind the auth gate via `route_layer`, so the
/// gate runs only for routes that actually matched — an unknown path
/// still produces a 404 rather than a 401.
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/me", get(get_me))
        .route(
            "/cart",
            post(create_or_update_cart).get(get_cart).delete(clear_cart),
        )
        .route("/checkout/whatsapp", post(whatsapp_checkout))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(root))
        // Catalog endpoints
        .route("/products", get(get_products))
        .route("/products/{product_id}", get(get_product))
        .route("/products/seed", post(seed_products))
        // Authentication endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected)
}
