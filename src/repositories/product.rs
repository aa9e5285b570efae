// src/repositories/product.rs
use sqlx::SqlitePool;

use crate::models::product::{encode_string_list, NewProduct, Product};

/// Listing sort orders. Anything unrecognized falls back to `Popular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    Newest,
    PriceLow,
    PriceHigh,
    Popular,
}

impl ProductSort {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "newest" => ProductSort::Newest,
            "price-low" => ProductSort::PriceLow,
            "price-high" => ProductSort::PriceHigh,
            _ => ProductSort::Popular,
        }
    }

    // `id` is TEXT, so Newest is lexicographic on the stored identifier.
    fn order_clause(self) -> &'static str {
        match self {
            ProductSort::Newest => "id DESC",
            ProductSort::PriceLow => "price ASC",
            ProductSort::PriceHigh => "price DESC",
            ProductSort::Popular => "reviews DESC, rating DESC",
        }
    }
}

/// Listing parameters after boundary parsing: `category` is already
/// lower-cased, with `None` meaning the `all` sentinel (no filter).
#[derive(Debug, Clone)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub sort: ProductSort,
    pub limit: i64,
    pub offset: i64,
}

/// One page of results plus the filtered-but-unpaginated total, so callers
/// can compute page count as `ceil(total / limit)`.
#[derive(Debug)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
}

const PRODUCT_COLUMNS: &str = "id, name, category, price, old_price, image, thumbnails, \
     description, mock_reviews_text, rating, reviews, colors, is_new";

pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Filter narrows, sort orders the narrowed set, offset/limit slice it.
    /// The total is counted before the slice is applied.
    pub async fn query_products(&self, filter: &ProductFilter) -> Result<ProductPage, sqlx::Error> {
        let order = filter.sort.order_clause();

        match &filter.category {
            Some(category) => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category = ?")
                        .bind(category)
                        .fetch_one(&self.pool)
                        .await?;

                let sql = format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = ? \
                     ORDER BY {order} LIMIT ? OFFSET ?"
                );
                let products = sqlx::query_as::<_, Product>(&sql)
                    .bind(category)
                    .bind(filter.limit)
                    .bind(filter.offset)
                    .fetch_all(&self.pool)
                    .await?;

                Ok(ProductPage { products, total })
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
                    .fetch_one(&self.pool)
                    .await?;

                let sql = format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY {order} LIMIT ? OFFSET ?"
                );
                let products = sqlx::query_as::<_, Product>(&sql)
                    .bind(filter.limit)
                    .bind(filter.offset)
                    .fetch_all(&self.pool)
                    .await?;

                Ok(ProductPage { products, total })
            }
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, sqlx::Error> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn insert(&self, product: &NewProduct) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO products \
             (id, name, category, price, old_price, image, thumbnails, \
              description, mock_reviews_text, rating, reviews, colors, is_new) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.old_price)
        .bind(&product.image)
        .bind(encode_string_list(&product.thumbnails))
        .bind(&product.description)
        .bind(&product.mock_reviews_text)
        .bind(product.rating)
        .bind(product.reviews)
        .bind(encode_string_list(&product.colors))
        .bind(product.is_new)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_sorts_case_insensitively() {
        assert_eq!(ProductSort::parse("newest"), ProductSort::Newest);
        assert_eq!(ProductSort::parse("NEWEST"), ProductSort::Newest);
        assert_eq!(ProductSort::parse("price-low"), ProductSort::PriceLow);
        assert_eq!(ProductSort::parse("price-high"), ProductSort::PriceHigh);
        assert_eq!(ProductSort::parse("popular"), ProductSort::Popular);
    }

    #[test]
    fn parse_falls_back_to_popular() {
        assert_eq!(ProductSort::parse(""), ProductSort::Popular);
        assert_eq!(ProductSort::parse("price"), ProductSort::Popular);
        assert_eq!(ProductSort::parse("rating"), ProductSort::Popular);
    }
}
