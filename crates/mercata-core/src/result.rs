//! Result type alias for Mercata.

use crate::MercataError;

/// A specialized `Result` type for Mercata operations.
pub type MercataResult<T> = Result<T, MercataError>;
