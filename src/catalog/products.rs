/**
 * Product Model and Database Operations
 *
 * This module handles the product catalog rows and their store
 * operations. Products are read-only from the storefront's point of
 * view; the only write path is the demo-catalog seed, which replaces
 * the whole catalog.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Product struct representing a catalog row in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Category slug (e.g. "business-cards")
    pub category: String,
    /// Marketing description
    pub description: String,
    /// Unit base price
    pub base_price: f64,
    /// Image URLs
    pub images: Vec<String>,
    /// Free-form per-category specifications (size, material, ...)
    pub specifications: serde_json::Value,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Product response projection
///
/// What the storefront sees: everything except `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub base_price: f64,
    pub images: Vec<String>,
    pub specifications: serde_json::Value,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            category: product.category,
            description: product.description,
            base_price: product.base_price,
            images: product.images,
            specifications: product.specifications,
        }
    }
}

/// List products, optionally filtered by category
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `category` - Optional category slug filter
///
/// # Returns
/// Products in insertion order
pub async fn list_products(
    pool: &PgPool,
    category: Option<&str>,
) -> Result<Vec<Product>, sqlx::Error> {
    let products = match category {
        Some(category) => {
            sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, category, description, base_price, images, specifications, created_at
                FROM products
                WHERE category = $1
                ORDER BY created_at
                "#,
            )
            .bind(category)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, category, description, base_price, images, specifications, created_at
                FROM products
                ORDER BY created_at
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(products)
}

/// Get product by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - Product ID
///
/// # Returns
/// Product or None if not found
pub async fn get_product_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>, sqlx::Error> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        SELECT id, name, category, description, base_price, images, specifications, created_at
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Replace the entire catalog with the given products
///
/// Runs delete-then-reinsert inside a single transaction, so callers
/// never observe a half-empty catalog and seeding twice yields exactly
/// the seeded set both times.
///
/// # Returns
/// Number of products inserted
pub async fn replace_catalog(pool: &PgPool, products: &[Product]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM products").execute(&mut *tx).await?;

    for product in products {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, category, description, base_price, images, specifications, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.base_price)
        .bind(&product.images)
        .bind(&product.specifications)
        .bind(product.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(products.len() as u64)
}
