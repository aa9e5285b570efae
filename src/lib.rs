//! SnapVolt catalog backend: paginated product listing plus email/password
//! registration and login over a SQLite store.

pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Assembles the full application: root health text, `/api` routes, CORS.
///
/// The frontend is served from a different origin, so CORS stays wide open.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .nest("/api", routes::create_router())
        .layer(cors)
        .with_state(state)
}

async fn index() -> &'static str {
    "SnapVolt backend is running!"
}
