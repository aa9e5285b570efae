use axum::{routing::get, Router};
use crate::handlers::product::list_products;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/products", get(list_products))
}
