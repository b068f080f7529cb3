//! Crate-wide result alias.

use crate::Error;

/// Result type used by every fallible operation in `fwatch_core`.
pub type Result<T> = std::result::Result<T, Error>;
