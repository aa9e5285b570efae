// src/database.rs
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::models::product::NewProduct;
use crate::repositories::product::ProductRepository;

pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

const CREATE_PRODUCTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS products (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    category TEXT NOT NULL,
    price REAL NOT NULL,
    old_price REAL,
    image TEXT NOT NULL,
    thumbnails TEXT NOT NULL DEFAULT '[]',
    description TEXT NOT NULL,
    mock_reviews_text TEXT,
    rating REAL NOT NULL,
    reviews INTEGER NOT NULL,
    colors TEXT NOT NULL DEFAULT '[]',
    is_new INTEGER NOT NULL DEFAULT 0
)";

const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
)";

/// Idempotent bootstrap: creates both tables, then loads the fixed catalog
/// if the products table is empty. Runs once before the server accepts calls.
pub async fn init_db(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;

    let products = ProductRepository::new(pool.clone());
    if products.count().await? > 0 {
        info!("Products table already populated, skipping seed");
        return Ok(());
    }

    info!("Populating initial product catalog");
    for product in seed_catalog() {
        products.insert(&product).await?;
    }
    info!("Initial product catalog populated");

    Ok(())
}

/// The fixed 12-item catalog loaded on first startup.
pub fn seed_catalog() -> Vec<NewProduct> {
    serde_json::from_str(include_str!("seed_catalog.json"))
        .expect("seed catalog is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_catalog_has_twelve_products() {
        assert_eq!(seed_catalog().len(), 12);
    }

    #[test]
    fn seed_catalog_names_and_ids_are_unique() {
        let catalog = seed_catalog();
        let ids: HashSet<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        let names: HashSet<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn seed_catalog_covers_three_cases() {
        let cases = seed_catalog()
            .iter()
            .filter(|p| p.category == "cases")
            .count();
        assert_eq!(cases, 3);
    }
}
