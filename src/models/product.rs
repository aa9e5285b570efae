use serde::Deserialize;
use sqlx::FromRow;

/// A catalog product as stored. `thumbnails` and `colors` are JSON-encoded
/// text columns; use [`decode_string_list`] to read them back as sequences.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub image: String,
    pub thumbnails: String,
    pub description: String,
    pub mock_reviews_text: Option<String>,
    pub rating: f64,
    pub reviews: i64,
    pub colors: String,
    pub is_new: bool,
}

/// Insert-side shape of a product, with sequence fields still in native form.
/// Field names follow the external camelCase naming so the seed catalog
/// deserializes directly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub old_price: Option<f64>,
    pub image: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub mock_reviews_text: Option<String>,
    pub rating: f64,
    pub reviews: i64,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
}

/// Decodes a JSON-encoded list column. Always yields a sequence: anything
/// unreadable (including legacy NULL-turned-empty text) comes back empty.
pub fn decode_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encodes a sequence for storage. An empty sequence stores as `"[]"`, never
/// NULL, so reads round-trip without a null check.
pub fn encode_string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_preserves_order() {
        let raw = r##"["#000000", "#60A5FA", "#DC2626"]"##;
        assert_eq!(decode_string_list(raw), vec!["#000000", "#60A5FA", "#DC2626"]);
    }

    #[test]
    fn decode_of_empty_list_is_empty() {
        assert!(decode_string_list("[]").is_empty());
    }

    #[test]
    fn decode_of_garbage_is_empty() {
        assert!(decode_string_list("").is_empty());
        assert!(decode_string_list("not json").is_empty());
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let items = vec!["https://example.com/a.png".to_string(), "https://example.com/b.png".to_string()];
        assert_eq!(decode_string_list(&encode_string_list(&items)), items);
        assert_eq!(encode_string_list(&[]), "[]");
    }
}
