/**
 * Cart HTTP Handlers
 *
 * Handlers for the authenticated cart endpoints:
 *
 * - `POST /api/cart` - create or replace the caller's cart
 * - `GET /api/cart` - fetch the caller's cart (or the empty sentinel)
 * - `DELETE /api/cart` - clear the caller's cart
 *
 * All three resolve the caller through the auth gate.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::cart::carts::{
    compute_total, delete_cart_by_user, get_cart_by_user, upsert_cart, Cart, CartItem,
};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;

/// Cart write request
#[derive(Debug, Serialize, Deserialize)]
pub struct CartCreate {
    /// Ordered line items replacing the current cart contents
    pub items: Vec<CartItem>,
}

/// Cart response projection
#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    /// Cart ID, or `""` when the user has no cart
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl CartResponse {
    /// The empty-cart sentinel returned when a user has no cart
    ///
    /// The empty id is a placeholder, not an addressable key.
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            items: Vec::new(),
            total: 0.0,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            items: cart.items,
            total: cart.total,
        }
    }
}

/// Validate cart items at the request boundary
///
/// Quantities must be positive and prices non-negative finite numbers.
fn validate_items(items: &[CartItem]) -> Result<(), ApiError> {
    for item in items {
        if item.quantity == 0 {
            return Err(ApiError::validation("Item quantity must be at least 1"));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(ApiError::validation(
                "Item price must be a non-negative number",
            ));
        }
    }
    Ok(())
}

/// Cart upsert handler
///
/// Recomputes the total server-side and performs an atomic
/// create-or-replace keyed on the caller's user id. The cart id stays
/// stable across replacements.
///
/// # Errors
///
/// * `400 Bad Request` - An item failed boundary validation
/// * `500 Internal Server Error` - Storage failure
pub async fn create_or_update_cart(
    CurrentUser(user): CurrentUser,
    State(pool): State<PgPool>,
    Json(request): Json<CartCreate>,
) -> Result<Json<CartResponse>, ApiError> {
    validate_items(&request.items)?;

    let total = compute_total(&request.items);

    let cart = upsert_cart(&pool, user.id, request.items, total).await?;

    tracing::info!("Cart upserted for user {}: total {:.2}", user.id, total);

    Ok(Json(CartResponse::from(cart)))
}

/// Cart retrieval handler
///
/// Returns the persisted cart, or the empty sentinel
/// `{id:"", items:[], total:0}` when the user has none.
pub async fn get_cart(
    CurrentUser(user): CurrentUser,
    State(pool): State<PgPool>,
) -> Result<Json<CartResponse>, ApiError> {
    let response = match get_cart_by_user(&pool, user.id).await? {
        Some(cart) => CartResponse::from(cart),
        None => CartResponse::empty(),
    };

    Ok(Json(response))
}

/// Cart clear handler
///
/// Unconditional delete; clearing a cart that does not exist succeeds.
pub async fn clear_cart(
    CurrentUser(user): CurrentUser,
    State(pool): State<PgPool>,
) -> Result<Json<serde_json::Value>, ApiError> {
    delete_cart_by_user(&pool, user.id).await?;

    Ok(Json(serde_json::json!({ "message": "Cart cleared" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id: "prod-1".to_string(),
            product_name: "Test Product".to_string(),
            quantity,
            custom_text: None,
            price,
        }
    }

    #[test]
    fn test_validate_accepts_normal_items() {
        assert!(validate_items(&[item(29.99, 1), item(0.0, 3)]).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        assert!(validate_items(&[item(29.99, 0)]).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        assert!(validate_items(&[item(-1.0, 1)]).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_price() {
        assert!(validate_items(&[item(f64::NAN, 1)]).is_err());
        assert!(validate_items(&[item(f64::INFINITY, 1)]).is_err());
    }

    #[test]
    fn test_empty_sentinel_shape() {
        let sentinel = CartResponse::empty();
        assert_eq!(sentinel.id, "");
        assert!(sentinel.items.is_empty());
        assert_eq!(sentinel.total, 0.0);
    }
}
