//! Validation error types for configuration and input validation.
//!
//! These errors represent user input or configuration problems that can be
//! corrected by the user.

use std::fmt;

/// Validation errors represent incorrect user input or configuration.
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Invalid configuration provided
    InvalidConfig(String),
    /// Parse error when reading configuration
    ParseError(String),
    /// Generic validation error
    ValidationError(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl ValidationError {
    /// Get exit code for validation errors (always 1).
    pub const fn exit_code(&self) -> i32 {
        1
    }
}
