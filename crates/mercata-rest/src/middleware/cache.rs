//! Response-cache middleware.
//!
//! Serves GET responses from the shared key-value store when a fresh entry
//! exists, and otherwise captures the handler's JSON body and writes it back
//! under the request's original path-and-query with the layer's TTL. Every
//! failure in the caching path degrades to running the inner handler: this
//! layer can never be the reason a request fails.

use axum::{
    body::{to_bytes, Body},
    extract::{OriginalUri, State},
    http::{header, HeaderMap, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use mercata_cache::{keys, CacheStore};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// State for one response-cache layer.
///
/// Constructed per protected route group with that group's TTL; all layers
/// share the single process-wide store handle.
#[derive(Clone)]
pub struct HttpCacheState {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl HttpCacheState {
    /// Creates the state for a cache layer with the given TTL.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }
}

/// Response-cache middleware.
///
/// Wire it per route group with
/// `middleware::from_fn_with_state(HttpCacheState::new(store, ttl), http_cache)`.
pub async fn http_cache(
    State(state): State<HttpCacheState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // Only safe reads are cacheable. Writes go straight through untouched.
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    // Key off the original path-and-query, before any nesting stripped it.
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| request.uri().clone(), |original| original.0.clone());
    let key = keys::response(uri.path_and_query().map_or(uri.path(), |pq| pq.as_str()));

    if !state.store.is_open() {
        warn!("Cache store is not open, skipping cache for '{}'", key);
        return next.run(request).await;
    }

    match state.store.get(&key).await {
        Ok(Some(cached)) => match serde_json::from_str::<Value>(&cached) {
            Ok(body) => {
                debug!("Serving '{}' from cache", key);
                return Json(body).into_response();
            }
            Err(e) => {
                // Unreadable entry: behave as if caching were absent. The
                // entry stays until its TTL drops it.
                warn!("Discarding unreadable cache entry for '{}': {}", key, e);
                return next.run(request).await;
            }
        },
        Err(e) => {
            warn!("Cache read for '{}' failed: {}", key, e);
            return next.run(request).await;
        }
        Ok(None) => {}
    }

    debug!("Cache miss for '{}', running handler", key);
    let response = next.run(request).await;
    capture_and_store(&state, key, response).await
}

/// Buffers a successful JSON response exactly once, queues the store write,
/// and reassembles the response. Anything else passes through untouched.
async fn capture_and_store(state: &HttpCacheState, key: String, response: Response) -> Response {
    if !response.status().is_success() || !is_json(response.headers()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            // The handler's body stream itself failed; nothing to forward.
            warn!("Failed to buffer response body for '{}': {}", key, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(_) => {
            let store = Arc::clone(&state.store);
            let ttl = state.ttl;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            // Fire and forget: the caller's response never waits on the write.
            tokio::spawn(async move {
                if let Err(e) = store.set_ex(&key, &text, ttl).await {
                    warn!("Cache write for '{}' failed: {}", key, e);
                }
            });
        }
        Err(e) => {
            debug!("Response for '{}' is not valid JSON, not caching: {}", key, e);
        }
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
