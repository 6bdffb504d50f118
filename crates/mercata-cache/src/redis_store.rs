//! Redis-backed store client.

use crate::CacheStore;
use async_trait::async_trait;
use mercata_config::RedisConfig;
use mercata_core::{MercataError, MercataResult};
use parking_lot::RwLock;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{debug, info};

/// Base delay between reconnect attempts, in milliseconds. The manager backs
/// off from here up to `RedisConfig::reconnect_max_delay_ms`.
const RECONNECT_BASE_DELAY_MS: u64 = 50;

/// Redis store handle shared by all cache layers in the process.
///
/// Wraps a single auto-reconnecting multiplexed connection. The handle is
/// constructed once at startup and injected into every interceptor instance;
/// `close` transitions it permanently to the "not open" state, after which
/// every operation fails and callers fall back to uncached behavior.
pub struct RedisStore {
    manager: RwLock<Option<ConnectionManager>>,
}

impl RedisStore {
    /// Connects to Redis and verifies the connection with a PING.
    pub async fn connect(config: &RedisConfig) -> MercataResult<Self> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| MercataError::cache(format!("Invalid Redis URL: {}", e)))?;

        let manager_config = ConnectionManagerConfig::new()
            .set_factor(RECONNECT_BASE_DELAY_MS)
            .set_max_delay(config.reconnect_max_delay_ms)
            .set_connection_timeout(config.connect_timeout());

        let mut manager = client
            .get_connection_manager_with_config(manager_config)
            .await
            .map_err(|e| MercataError::cache(format!("Failed to connect to Redis: {}", e)))?;

        redis::cmd("PING")
            .query_async::<String>(&mut manager)
            .await
            .map_err(|e| MercataError::cache(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            manager: RwLock::new(Some(manager)),
        })
    }

    /// Creates a permanently closed handle.
    ///
    /// Used when Redis is disabled by configuration or the startup connect
    /// failed; the process keeps serving traffic without caching.
    #[must_use]
    pub fn disconnected() -> Self {
        Self {
            manager: RwLock::new(None),
        }
    }

    /// Closes the connection. Subsequent operations observe "not open".
    pub fn close(&self) {
        if self.manager.write().take().is_some() {
            info!("Redis connection closed");
        }
    }

    /// Clones the manager out of the lock so no guard is held across awaits.
    fn manager(&self) -> MercataResult<ConnectionManager> {
        self.manager
            .read()
            .clone()
            .ok_or_else(|| MercataError::cache("Redis connection is not open"))
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    fn is_open(&self) -> bool {
        self.manager.read().is_some()
    }

    async fn get(&self, key: &str) -> MercataResult<Option<String>> {
        let mut conn = self.manager()?;

        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| MercataError::cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> MercataResult<()> {
        let mut conn = self.manager()?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| MercataError::cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_store_is_not_open() {
        let store = RedisStore::disconnected();
        assert!(!store.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let store = RedisStore::disconnected();
        store.close();
        store.close();
        assert!(!store.is_open());
    }

    #[tokio::test]
    async fn test_disconnected_store_operations_fail() {
        let store = RedisStore::disconnected();

        let read = store.get("mercata:http:/product").await;
        assert!(read.is_err());

        let write = store
            .set_ex("mercata:http:/product", "{}", Duration::from_secs(60))
            .await;
        assert!(write.is_err());
    }
}
