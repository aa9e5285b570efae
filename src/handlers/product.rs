// src/handlers/product.rs
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::instrument;

use crate::dtos::product::{ProductListQuery, ProductListResponse, ProductView};
use crate::error::AppError;
use crate::repositories::product::{ProductFilter, ProductRepository, ProductSort};
use crate::state::AppState;

// GET /products - paginated, filterable, sortable listing
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Result<Json<ProductListResponse>, AppError> {
    let category = params.category.to_ascii_lowercase();
    let filter = ProductFilter {
        category: if category == "all" { None } else { Some(category) },
        sort: ProductSort::parse(&params.sort),
        limit: params.limit,
        offset: params.offset,
    };

    let page = ProductRepository::new(state.db_pool.clone())
        .query_products(&filter)
        .await?;

    Ok(Json(ProductListResponse {
        products: page.products.into_iter().map(ProductView::from).collect(),
        total: page.total,
        limit: params.limit,
        offset: params.offset,
    }))
}
