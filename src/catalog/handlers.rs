/**
 * Catalog HTTP Handlers
 *
 * Handlers for the public product endpoints:
 *
 * - `GET /api/products` - list products, optional category filter
 * - `GET /api/products/{product_id}` - single product
 * - `POST /api/products/seed` - replace the catalog with the demo set
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::products::{
    get_product_by_id, list_products, replace_catalog, ProductResponse,
};
use crate::catalog::seed::demo_catalog;
use crate::error::ApiError;

/// Query parameters for product listing
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// Optional category slug filter
    pub category: Option<String>,
}

/// List products handler
///
/// Returns the catalog (optionally filtered by `?category=`) as
/// response projections.
pub async fn get_products(
    State(pool): State<PgPool>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = list_products(&pool, query.category.as_deref()).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Get single product handler
///
/// # Errors
///
/// * `404 Not Found` - No product with this id. A malformed id cannot
///   name any product, so it gets the same response.
pub async fn get_product(
    State(pool): State<PgPool>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = Uuid::parse_str(&product_id).map_err(|_| ApiError::not_found("Product"))?;

    let product = get_product_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product"))?;

    Ok(Json(ProductResponse::from(product)))
}

/// Seed products handler
///
/// Replaces whatever catalog exists with the fixed demo catalog
/// (drop-then-reinsert, not append). Seeding twice yields exactly the
/// demo catalog both times.
pub async fn seed_products(
    State(pool): State<PgPool>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let catalog = demo_catalog();
    let inserted = replace_catalog(&pool, &catalog).await?;

    tracing::info!("Seeded {} products", inserted);

    Ok(Json(serde_json::json!({
        "message": format!("Seeded {} products", inserted),
    })))
}
