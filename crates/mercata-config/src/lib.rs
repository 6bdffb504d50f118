//! # Mercata Config
//!
//! Configuration structures and the layered loader for the Mercata
//! storefront API. Values come from TOML files under `./config` with
//! `MERCATA_`-prefixed environment variables taking precedence.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
