use dotenvy::dotenv;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use snapvolt_backend::{build_app, database, state::AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Create database pool; the SQLite file is created on first run
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:snapvolt.db".to_string());
    let db_pool = database::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    // Create tables and seed the catalog when empty
    database::init_db(&db_pool)
        .await
        .expect("Failed to initialize database");

    let app_state = AppState::new(db_pool);
    let app = build_app(app_state);

    let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from((host, port));

    let listener = TcpListener::bind(addr).await.expect("Failed to bind address");
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
