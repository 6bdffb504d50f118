//! Store client trait for the response cache.

use async_trait::async_trait;
use mercata_core::MercataResult;
use std::time::Duration;

/// Key-value store contract consumed by the response-cache interceptor.
///
/// Uses JSON text for type-erased storage. Implementations must be safe for
/// concurrent use by many in-flight requests; the interceptor clones one
/// shared handle into every route group.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Whether the underlying connection is currently open.
    ///
    /// Callers must never assume "open": a store can report open and still
    /// fail the next operation.
    fn is_open(&self) -> bool;

    /// Reads the text stored under `key`.
    ///
    /// Returns `None` if the key does not exist or has expired.
    async fn get(&self, key: &str) -> MercataResult<Option<String>>;

    /// Writes `value` under `key` with the given time-to-live.
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> MercataResult<()>;
}
