/**
 * Cart Model and Database Operations
 *
 * This module handles per-user cart documents. A user has at most one
 * cart, enforced by the UNIQUE (user_id) constraint, and all writes go
 * through a single atomic upsert keyed on that constraint — there is no
 * lookup-then-branch window where two concurrent writes could both
 * decide to insert.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// A single cart line item
///
/// Immutable value embedded in the cart's JSONB items column. The
/// price is the client-declared unit price; the server recomputes the
/// cart total from it but does not check it against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Opaque product reference
    pub product_id: String,
    /// Product display name at the time the item was added
    pub product_name: String,
    /// Number of units (positive)
    pub quantity: u32,
    /// Optional customization text (engraving, print copy, ...)
    #[serde(default)]
    pub custom_text: Option<String>,
    /// Unit price (non-negative)
    pub price: f64,
}

/// Cart struct representing a cart row in the database
#[derive(Debug, Clone)]
pub struct Cart {
    /// Unique cart ID (UUID), stable across replacements
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Ordered line items
    pub items: Vec<CartItem>,
    /// Derived total, always Σ price × quantity at time of write
    pub total: f64,
    /// Created at timestamp (set on first write, retained after)
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp (refreshed on every write)
    pub updated_at: DateTime<Utc>,
}

/// Row shape for sqlx; the JSONB items column decodes through
/// `sqlx::types::Json`.
#[derive(sqlx::FromRow)]
struct CartRow {
    id: Uuid,
    user_id: Uuid,
    items: Json<Vec<CartItem>>,
    total: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CartRow> for Cart {
    fn from(row: CartRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            items: row.items.0,
            total: row.total,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Compute a cart total from its items
///
/// The total is derived, never authoritative: every write recomputes
/// it as Σ price × quantity over the input sequence.
pub fn compute_total(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum()
}

/// Create or replace the cart for a user
///
/// A single atomic INSERT .. ON CONFLICT keyed on `user_id`: if the
/// user already has a cart, its items, total, and `updated_at` are
/// replaced while `id` and `created_at` are retained; otherwise a
/// fresh row is created. Two concurrent upserts for the same user
/// serialize on the constraint instead of racing.
///
/// # Returns
/// The resulting cart row
pub async fn upsert_cart(
    pool: &PgPool,
    user_id: Uuid,
    items: Vec<CartItem>,
    total: f64,
) -> Result<Cart, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, CartRow>(
        r#"
        INSERT INTO carts (id, user_id, items, total, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id) DO UPDATE
        SET items = EXCLUDED.items,
            total = EXCLUDED.total,
            updated_at = EXCLUDED.updated_at
        RETURNING id, user_id, items, total, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(Json(items))
    .bind(total)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(Cart::from(row))
}

/// Get the cart for a user
///
/// # Returns
/// Cart or None if the user has no cart
pub async fn get_cart_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Cart>, sqlx::Error> {
    let row = sqlx::query_as::<_, CartRow>(
        r#"
        SELECT id, user_id, items, total, created_at, updated_at
        FROM carts
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Cart::from))
}

/// Delete the cart for a user
///
/// Idempotent: deleting a non-existent cart is not an error.
///
/// # Returns
/// Number of rows deleted (0 or 1)
pub async fn delete_cart_by_user(pool: &PgPool, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM carts WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
