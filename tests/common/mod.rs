//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use product_catalog::catalog::Product;
use product_catalog::config::SourceConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// Product with neutral price/stock values.
pub fn product(id: u64, title: &str, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        thumbnail: format!("https://cdn.example/{id}.png"),
        price: 10.0,
        discount_percentage: 0.0,
        stock: 5,
        category: category.to_string(),
    }
}

/// The three-product list used by the end-to-end scenarios.
pub fn shirt_and_mugs() -> Vec<Product> {
    vec![
        product(1, "Red Shirt", "clothes"),
        product(2, "Blue Mug", "kitchen"),
        product(3, "Red Mug", "kitchen"),
    ]
}

pub fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}

/// JSON body of `GET /products` for `products`.
pub fn products_json(products: &[Product]) -> String {
    serde_json::json!({
        "products": products,
        "total": products.len(),
        "skip": 0,
        "limit": 50
    })
    .to_string()
}

pub fn source_config(base_url: &str) -> SourceConfig {
    SourceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        ..SourceConfig::default()
    }
}

/// Create a temporary config file with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
