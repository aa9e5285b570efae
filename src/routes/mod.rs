pub mod auth;
pub mod products;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().merge(products::routes()).merge(auth::routes())
}
