//! # Mercata REST
//!
//! HTTP layer for the Mercata storefront API. The interesting part is the
//! response-cache middleware in [`middleware::http_cache`]; the controllers
//! are thin plumbing over an in-memory catalog.

pub mod catalog;
pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
