/**
 * Checkout Handoff
 *
 * This module implements POST /api/checkout/whatsapp: the persisted
 * cart is formatted into an order message and wrapped in a pre-filled
 * WhatsApp deep link the storefront can open directly.
 *
 * There is no payment processing; the deep link IS the checkout.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::users::User;
use crate::cart::carts::{get_cart_by_user, CartItem};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;

/// Checkout handoff response
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Pre-filled `https://wa.me/?text=...` deep link
    pub whatsapp_url: String,
    /// The raw order message embedded in the link
    pub message: String,
}

/// Format an order message from a cart
///
/// Lines are joined with `%0A` (the URL-encoded newline WhatsApp
/// expects inside a `wa.me` text parameter).
fn format_order_message(user: &User, items: &[CartItem], total: f64) -> String {
    let mut lines = vec![
        format!("🔥 NEW ORDER from {}", user.name),
        format!("📧 Email: {}", user.email),
        String::new(),
        "📦 ITEMS:".to_string(),
    ];

    for item in items {
        let custom_text = match &item.custom_text {
            Some(text) if !text.is_empty() => format!(" | Custom: {text}"),
            _ => String::new(),
        };
        lines.push(format!(
            "• {} x{} - ${:.2}{}",
            item.product_name, item.quantity, item.price, custom_text
        ));
    }

    lines.push(String::new());
    lines.push(format!("💰 TOTAL: ${total:.2}"));

    lines.join("%0A")
}

/// WhatsApp checkout handler
///
/// Builds the order message from the caller's persisted cart.
///
/// # Errors
///
/// * `400 Bad Request` - Cart is missing or has no items
/// * `500 Internal Server Error` - Storage failure
pub async fn whatsapp_checkout(
    CurrentUser(user): CurrentUser,
    State(pool): State<PgPool>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let cart = get_cart_by_user(&pool, user.id)
        .await?
        .filter(|cart| !cart.items.is_empty())
        .ok_or(ApiError::EmptyCart)?;

    let message = format_order_message(&user, &cart.items, cart.total);
    let whatsapp_url = format!("https://wa.me/?text={message}");

    tracing::info!("Checkout handoff for user {}", user.id);

    Ok(Json(CheckoutResponse {
        whatsapp_url,
        message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "zoe@example.com".to_string(),
            name: "Zoe".to_string(),
            password_hash: "irrelevant".to_string(),
            created_at: Utc::now(),
        }
    }

    fn item(name: &str, quantity: u32, price: f64, custom_text: Option<&str>) -> CartItem {
        CartItem {
            product_id: "prod-1".to_string(),
            product_name: name.to_string(),
            quantity,
            custom_text: custom_text.map(str::to_string),
            price,
        }
    }

    #[test]
    fn test_message_format() {
        let items = vec![
            item("Premium Business Cards", 2, 29.99, None),
            item("Vibrant Vinyl Banners", 1, 89.99, Some("Grand Opening")),
        ];
        let message = format_order_message(&test_user(), &items, 149.97);

        assert_eq!(
            message,
            "🔥 NEW ORDER from Zoe%0A\
             📧 Email: zoe@example.com%0A\
             %0A\
             📦 ITEMS:%0A\
             • Premium Business Cards x2 - $29.99%0A\
             • Vibrant Vinyl Banners x1 - $89.99 | Custom: Grand Opening%0A\
             %0A\
             💰 TOTAL: $149.97"
        );
    }

    #[test]
    fn test_empty_custom_text_is_omitted() {
        let items = vec![item("Posters", 1, 39.99, Some(""))];
        let message = format_order_message(&test_user(), &items, 39.99);
        assert!(!message.contains("Custom:"));
    }

    #[test]
    fn test_prices_use_two_decimals() {
        let items = vec![item("Posters", 3, 10.0, None)];
        let message = format_order_message(&test_user(), &items, 30.0);
        assert!(message.contains("$10.00"));
        assert!(message.contains("💰 TOTAL: $30.00"));
    }
}
