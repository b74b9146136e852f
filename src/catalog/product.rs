use serde::{Deserialize, Serialize};

/// One catalog item as returned by the product API.
///
/// Products are immutable once fetched; the page only ever clones them
/// into the derived view or the basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub thumbnail: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub stock: u32,
    pub category: String,
}

impl Product {
    /// Price after applying the discount percentage.
    pub fn discounted_price(&self) -> f64 {
        let discount = self.discount_percentage.clamp(0.0, 100.0);
        self.price * (100.0 - discount) / 100.0
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Response envelope of `GET /products`.
///
/// Only `products` is required; paging fields are informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            id: 2,
            title: "Blue Mug".to_string(),
            thumbnail: "https://cdn.example/mug.png".to_string(),
            price: 20.0,
            discount_percentage: 25.0,
            stock: 0,
            category: "kitchen".to_string(),
        }
    }

    #[test]
    fn discounted_price_applies_percentage() {
        assert!((mug().discounted_price() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn discount_outside_range_is_clamped() {
        let mut product = mug();
        product.discount_percentage = 150.0;
        assert_eq!(product.discounted_price(), 0.0);
    }

    #[test]
    fn zero_stock_is_not_in_stock() {
        assert!(!mug().in_stock());
    }

    #[test]
    fn page_decodes_camel_case_and_ignores_extra_fields() {
        let json = r#"{
            "products": [{
                "id": 7,
                "title": "Lamp",
                "description": "ignored",
                "thumbnail": "t.png",
                "price": 9.5,
                "discountPercentage": 3.2,
                "rating": 4.1,
                "stock": 12,
                "category": "home"
            }],
            "total": 194,
            "skip": 0,
            "limit": 50
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].discount_percentage, 3.2);
        assert_eq!(page.total, Some(194));
    }

    #[test]
    fn page_without_paging_fields_decodes() {
        let page: ProductPage = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.limit, None);
    }
}
