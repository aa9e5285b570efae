// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::{decode_string_list, Product};

fn default_category() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    "popular".to_string()
}

fn default_limit() -> i64 {
    8
}

/// Query parameters for the product listing. Non-numeric `limit`/`offset`
/// values are rejected by the `Query` extractor before reaching the handler.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// External representation of a product: camelCase field names, with the
/// stored JSON list columns expanded to literal sequences.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub image: String,
    pub thumbnails: Vec<String>,
    pub description: String,
    pub mock_reviews_text: Option<String>,
    pub rating: f64,
    pub reviews: i64,
    pub colors: Vec<String>,
    pub is_new: bool,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            thumbnails: decode_string_list(&product.thumbnails),
            colors: decode_string_list(&product.colors),
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
            old_price: product.old_price,
            image: product.image,
            description: product.description,
            mock_reviews_text: product.mock_reviews_text,
            rating: product.rating,
            reviews: product.reviews,
            is_new: product.is_new,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductView>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Ultra Protective Case".to_string(),
            category: "cases".to_string(),
            price: 29.99,
            old_price: Some(39.99),
            image: "https://example.com/case.png".to_string(),
            thumbnails: r#"["https://example.com/a.png","https://example.com/b.png"]"#.to_string(),
            description: "A case.".to_string(),
            mock_reviews_text: None,
            rating: 4.8,
            reviews: 125,
            colors: "[]".to_string(),
            is_new: true,
        }
    }

    #[test]
    fn view_expands_stored_lists() {
        let view = ProductView::from(sample_product());
        assert_eq!(
            view.thumbnails,
            vec!["https://example.com/a.png", "https://example.com/b.png"]
        );
        assert!(view.colors.is_empty());
    }

    #[test]
    fn view_serializes_with_external_names() {
        let value = serde_json::to_value(ProductView::from(sample_product())).unwrap();
        assert_eq!(value["oldPrice"], serde_json::json!(39.99));
        assert_eq!(value["isNew"], serde_json::json!(true));
        assert!(value["mockReviewsText"].is_null());
        assert!(value.get("old_price").is_none());
    }
}
