use axum::{routing::post, Router};
use crate::handlers::auth::authenticate;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth", post(authenticate))
}
