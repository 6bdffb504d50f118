//! HTTP middleware.

mod cache;
mod logging;

pub use cache::{http_cache, HttpCacheState};
pub use logging::logging_middleware;
