//! Integration tests for the router with the response-cache layers wired in.

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{body_json, send, send_json, settle, MemoryStore};
use mercata_cache::{CacheStore, RedisStore};
use mercata_config::{CacheConfig, ServerConfig};
use mercata_rest::{catalog::Catalog, create_router, AppState};
use serde_json::json;
use std::sync::Arc;

fn test_router(store: Arc<dyn CacheStore>, cache_enabled: bool) -> (Router, Arc<Catalog>) {
    let catalog = Arc::new(Catalog::with_seed_data());
    let state = AppState::new(Arc::clone(&catalog));
    let cache_config = CacheConfig {
        enabled: cache_enabled,
        catalog_ttl_secs: 900,
    };
    let router = create_router(state, store, &ServerConfig::default(), &cache_config);
    (router, catalog)
}

#[tokio::test]
async fn test_admin_writes_do_not_invalidate_cached_reads() {
    let store = Arc::new(MemoryStore::new());
    let (app, _) = test_router(Arc::clone(&store) as Arc<dyn CacheStore>, true);

    let first = body_json(send(&app, Method::GET, "/product").await).await;
    settle().await;
    assert_eq!(store.write_count(), 1);

    let response = send_json(
        &app,
        Method::POST,
        "/admin/product",
        &json!({ "name": "French Press", "price_cents": 2900, "category": "Equipment" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The cached listing is stale until its TTL expires.
    let second = body_json(send(&app, Method::GET, "/product").await).await;
    assert_eq!(first, second);
    assert_eq!(first["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_product_detail_survives_delete_until_ttl() {
    let store = Arc::new(MemoryStore::new());
    let (app, catalog) = test_router(Arc::clone(&store) as Arc<dyn CacheStore>, true);

    let id = catalog.list_products()[0].id;
    let uri = format!("/product/{}", id);

    let first = body_json(send(&app, Method::GET, &uri).await).await;
    settle().await;

    let response = send(&app, Method::DELETE, &format!("/admin/product/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Still served from cache after the delete.
    let second = send(&app, Method::GET, &uri).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await, first);
}

#[tokio::test]
async fn test_unknown_product_is_not_cached() {
    let store = Arc::new(MemoryStore::new());
    let (app, _) = test_router(Arc::clone(&store) as Arc<dyn CacheStore>, true);

    let uri = "/product/00000000-0000-0000-0000-000000000000";
    let first = send(&app, Method::GET, uri).await;
    settle().await;
    let second = send(&app, Method::GET, uri).await;

    assert_eq!(first.status(), StatusCode::NOT_FOUND);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_admin_routes_touch_no_store() {
    let store = Arc::new(MemoryStore::new());
    let (app, _) = test_router(Arc::clone(&store) as Arc<dyn CacheStore>, true);

    let response = send_json(
        &app,
        Method::POST,
        "/admin/product",
        &json!({ "name": "Kettle", "price_cents": 4500, "category": "Equipment" }),
    )
    .await;
    settle().await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(store.read_count(), 0);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_cache_disabled_bypasses_store() {
    let store = Arc::new(MemoryStore::new());
    let (app, _) = test_router(Arc::clone(&store) as Arc<dyn CacheStore>, false);

    send(&app, Method::GET, "/product").await;
    send(&app, Method::GET, "/category").await;
    settle().await;

    assert_eq!(store.read_count(), 0);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_fail_open_with_disconnected_redis_store() {
    let store: Arc<dyn CacheStore> = Arc::new(RedisStore::disconnected());
    let (app, _) = test_router(store, true);

    // Every request reaches its handler and succeeds without the store.
    let products = send(&app, Method::GET, "/product").await;
    assert_eq!(products.status(), StatusCode::OK);
    assert_eq!(
        body_json(products).await["data"].as_array().unwrap().len(),
        3
    );

    let categories = send(&app, Method::GET, "/category").await;
    assert_eq!(categories.status(), StatusCode::OK);

    let ready = send(&app, Method::GET, "/ready").await;
    assert_eq!(ready.status(), StatusCode::OK);
    assert_eq!(body_json(ready).await["cache"], "closed");
}

#[tokio::test]
async fn test_health_endpoints() {
    let store = Arc::new(MemoryStore::new());
    let (app, _) = test_router(Arc::clone(&store) as Arc<dyn CacheStore>, true);

    let health = send(&app, Method::GET, "/health").await;
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_json(health).await["status"], "healthy");

    let ready = send(&app, Method::GET, "/ready").await;
    assert_eq!(body_json(ready).await["cache"], "open");

    let live = send(&app, Method::GET, "/live").await;
    assert_eq!(live.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_category_and_product_entries_are_isolated() {
    let store = Arc::new(MemoryStore::new());
    let (app, _) = test_router(Arc::clone(&store) as Arc<dyn CacheStore>, true);

    let products = body_json(send(&app, Method::GET, "/product").await).await;
    let categories = body_json(send(&app, Method::GET, "/category").await).await;
    settle().await;

    assert_eq!(store.write_count(), 2);
    assert_ne!(products, categories);

    // Repeat reads are hits on their own entries.
    assert_eq!(body_json(send(&app, Method::GET, "/product").await).await, products);
    assert_eq!(
        body_json(send(&app, Method::GET, "/category").await).await,
        categories
    );
    assert_eq!(store.write_count(), 2);
}
