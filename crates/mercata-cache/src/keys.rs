//! Cache key generator for consistent key naming.

/// Prefix for all response-cache keys.
///
/// Namespaces this cache against other uses of the same Redis instance.
const CACHE_PREFIX: &str = "mercata:http";

/// Generate the cache key for a request's original path-and-query.
///
/// Two requests with the same path and query string map to the same key
/// regardless of their headers or bodies.
#[must_use]
pub fn response(path_and_query: &str) -> String {
    format!("{}:{}", CACHE_PREFIX, path_and_query)
}
