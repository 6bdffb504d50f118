//! # Mercata Cache
//!
//! Store-client side of the response cache: a small key-value store
//! abstraction with a Redis implementation, plus the cache-key builder.
//!
//! The HTTP-facing interceptor lives in `mercata-rest`; this crate only
//! knows how to talk to the store.

pub mod keys;
mod redis_store;
mod store;

pub use redis_store::RedisStore;
pub use store::CacheStore;
