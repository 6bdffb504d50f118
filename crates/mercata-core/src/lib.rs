//! # Mercata Core
//!
//! Core types and error definitions shared by every layer of the Mercata
//! storefront API.

pub mod error;
pub mod result;

pub use error::*;
pub use result::*;
