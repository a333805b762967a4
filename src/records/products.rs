//! Product catalog records

use crate::impl_record;

impl_record!(
    Product,
    "product",
    search: ["name"],
    filter: ["category", "status"],
    sort: ["price", "rating"],
    {
        name: String,
        category: String,
        price: f64,
        rating: f64,
        image: String,
    }
);

/// The static product collection a catalog page loads with
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            "in-stock".to_string(),
            "Aurora Desk Lamp".to_string(),
            "lighting".to_string(),
            29.99,
            4.5,
            "https://cdn.example.com/images/aurora-desk-lamp.jpg".to_string(),
        ),
        Product::new(
            "in-stock".to_string(),
            "Walnut Monitor Stand".to_string(),
            "furniture".to_string(),
            39.99,
            4.7,
            "https://cdn.example.com/images/walnut-monitor-stand.jpg".to_string(),
        ),
        Product::new(
            "sold-out".to_string(),
            "Felt Desk Mat".to_string(),
            "accessories".to_string(),
            19.99,
            4.2,
            "https://cdn.example.com/images/felt-desk-mat.jpg".to_string(),
        ),
    ]
}
