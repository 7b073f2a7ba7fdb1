/**
 * Demo Catalog
 *
 * The fixed six-product demo catalog inserted by POST /api/products/seed.
 * IDs and timestamps are generated fresh on every seed; the rest of the
 * data is static.
 */

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::catalog::products::Product;

/// Number of products in the demo catalog
pub const DEMO_CATALOG_SIZE: usize = 6;

fn product(
    name: &str,
    category: &str,
    description: &str,
    base_price: f64,
    images: &[&str],
    specifications: serde_json::Value,
) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        base_price,
        images: images.iter().map(|url| url.to_string()).collect(),
        specifications,
        created_at: Utc::now(),
    }
}

/// Build the fixed demo catalog
pub fn demo_catalog() -> Vec<Product> {
    vec![
        product(
            "Premium Business Cards",
            "business-cards",
            "Make a lasting impression with our ultra-thick 32pt cards. Matte or gloss finish available.",
            29.99,
            &[
                "https://images.unsplash.com/photo-1589939705384-5185137a7f0f?w=800",
                "https://images.unsplash.com/photo-1620714223589-a0ad3b4aaac9?w=800",
                "https://images.unsplash.com/photo-1611926653670-1c0426c4c0c5?w=800",
            ],
            json!({
                "size": "3.5\" x 2\"",
                "material": "32pt Premium Cardstock",
                "finish": "Matte/Gloss",
                "quantity": "250 cards",
            }),
        ),
        product(
            "Vibrant Vinyl Banners",
            "banners",
            "Weather-resistant vinyl banners perfect for outdoor events. UV-resistant inks guaranteed.",
            89.99,
            &[
                "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800",
                "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800",
                "https://images.unsplash.com/photo-1579547621309-0a9f9ab3bc13?w=800",
            ],
            json!({
                "size": "4ft x 8ft",
                "material": "13oz Vinyl",
                "finish": "Matte",
                "grommets": "Yes",
            }),
        ),
        product(
            "Museum-Quality Posters",
            "posters",
            "Gallery-grade posters on premium paper. Perfect for art prints and promotional displays.",
            39.99,
            &[
                "https://images.unsplash.com/photo-1724443907272-75019844f658?w=800",
                "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=800",
            ],
            json!({
                "size": "24\" x 36\"",
                "material": "200gsm Silk Paper",
                "finish": "Satin",
                "lamination": "Optional",
            }),
        ),
        product(
            "Luxury Business Cards",
            "business-cards",
            "Ultra-premium black metal cards with laser engraving. The ultimate flex.",
            199.99,
            &[
                "https://images.unsplash.com/photo-1632516643720-e7f5d7d6ecc9?w=800",
                "https://images.unsplash.com/photo-1620714223084-8fcacc6dfd8d?w=800",
                "https://images.unsplash.com/photo-1611162616475-46b635cb6868?w=800",
            ],
            json!({
                "size": "3.5\" x 2\"",
                "material": "Stainless Steel",
                "finish": "Brushed Metal",
                "quantity": "100 cards",
            }),
        ),
        product(
            "Mesh Fence Banners",
            "banners",
            "Wind-resistant mesh banners for construction sites and outdoor venues.",
            129.99,
            &[
                "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=800",
                "https://images.unsplash.com/photo-1487017159836-4e23ece2e4cf?w=800",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800",
            ],
            json!({
                "size": "8ft x 10ft",
                "material": "Mesh Vinyl",
                "finish": "Matte",
                "wind_slits": "Yes",
            }),
        ),
        product(
            "Holographic Posters",
            "posters",
            "Next-gen holographic posters that shift colors. Pure Gen Z energy.",
            79.99,
            &[
                "https://images.unsplash.com/photo-1579783900882-c0d3dad7b119?w=800",
                "https://images.unsplash.com/photo-1634942537034-2531766767d1?w=800",
                "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?w=800",
            ],
            json!({
                "size": "18\" x 24\"",
                "material": "Holographic Film",
                "finish": "Metallic Shimmer",
                "backing": "Foam Core",
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_size_is_fixed() {
        assert_eq!(demo_catalog().len(), DEMO_CATALOG_SIZE);
    }

    #[test]
    fn test_catalog_categories() {
        let catalog = demo_catalog();
        let count = |cat: &str| catalog.iter().filter(|p| p.category == cat).count();
        assert_eq!(count("business-cards"), 2);
        assert_eq!(count("banners"), 2);
        assert_eq!(count("posters"), 2);
    }

    #[test]
    fn test_catalog_prices_are_positive() {
        assert!(demo_catalog().iter().all(|p| p.base_price > 0.0));
    }

    #[test]
    fn test_catalog_ids_are_fresh_per_build() {
        let first: Vec<_> = demo_catalog().into_iter().map(|p| p.id).collect();
        let second: Vec<_> = demo_catalog().into_iter().map(|p| p.id).collect();
        assert!(first.iter().all(|id| !second.contains(id)));
    }
}
