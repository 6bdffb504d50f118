//! Public catalog controllers.
//!
//! These are the cacheable read routes; each group is wrapped in its own
//! response-cache layer by the router.

use crate::{
    catalog::{Category, Product},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use mercata_core::MercataError;
use tracing::debug;
use uuid::Uuid;

/// Creates the product router.
pub fn product_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

/// Creates the category router.
pub fn category_router() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

/// List all products.
async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    debug!("List products request");
    ok(state.catalog.list_products())
}

/// Get a product by id.
async fn get_product(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Product> {
    debug!("Get product request: {}", id);

    let product = state
        .catalog
        .get_product(id)
        .ok_or_else(|| MercataError::not_found("Product", id))?;
    ok(product)
}

/// List all categories.
async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    debug!("List categories request");
    ok(state.catalog.list_categories())
}
