//! Admin catalog controller.
//!
//! Write routes mounted outside the cache layers. Note that admin writes do
//! not invalidate already-cached catalog reads; stale entries survive until
//! their TTL expires.

use crate::{
    catalog::Product,
    responses::{created, no_content, ApiResponse, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use mercata_core::MercataError;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price_cents: i64,
    pub category: String,
}

/// Creates the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", post(create_product))
        .route("/product/:id", delete(delete_product))
}

/// Create a new product.
async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    debug!("Create product request: {}", request.name);

    if request.name.trim().is_empty() {
        return Err(MercataError::validation("Product name must not be empty").into());
    }
    if request.price_cents < 0 {
        return Err(MercataError::validation("Product price must not be negative").into());
    }

    let product =
        state
            .catalog
            .insert_product(request.name, request.price_cents, request.category);
    Ok(created(product))
}

/// Delete a product.
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    debug!("Delete product request: {}", id);

    if !state.catalog.remove_product(id) {
        return Err(MercataError::not_found("Product", id).into());
    }
    Ok(no_content())
}
