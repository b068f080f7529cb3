//! Error types for fwatch with categorization:
//!
//! - **Validation errors**: configuration and input problems (exit code 1)
//! - **System errors**: IO and directory watching (exit code 2)
//! - **Execution errors**: record store failures (exit code 4)
//!
//! Every variant here is a startup or caller-facing error. Failures while
//! processing a single path are [`crate::ItemError`] and never surface as
//! an `Error`.

pub mod execution;
pub mod system;
pub mod validation;

pub use execution::ExecutionError;
use std::fmt;
pub use system::SystemError;
pub use validation::ValidationError;

/// Top-level error type that can represent any error in the system.
#[derive(Debug, Clone)]
pub enum Error {
    /// Validation error from input or configuration
    Validation(ValidationError),
    /// System error from IO or the change source
    System(SystemError),
    /// Execution error from the record store
    Execution(ExecutionError),
    /// Unknown error (fallback)
    Unknown(String),
}

impl Error {
    /// Create a validation error from an invalid config.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidConfig(msg.into()))
    }

    /// Create a validation error from a parse error.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::ParseError(msg.into()))
    }

    /// Create a validation error from a validation failure.
    pub fn validation_error(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::ValidationError(msg.into()))
    }

    /// Create a system error from an IO error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::System(SystemError::IoError(msg.into()))
    }

    /// Create a system error for a watch that could not be started.
    pub fn watch_error(path: impl Into<String>, source: impl Into<String>) -> Self {
        Self::System(SystemError::WatchFailed {
            path: path.into(),
            source: source.into(),
        })
    }

    /// Create an execution error from a database failure.
    pub fn database_error(msg: impl Into<String>) -> Self {
        Self::Execution(ExecutionError::DatabaseError(msg.into()))
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::System(err) => write!(f, "{err}"),
            Self::Execution(err) => write!(f, "{err}"),
            Self::Unknown(msg) => write!(f, "Unknown error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Returns the process exit code for this error.
    ///
    /// - 1: bad configuration or input
    /// - 2: IO or watch failure
    /// - 4: record store failure
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(err) => err.exit_code(),
            Self::System(err) => err.exit_code(),
            Self::Execution(err) => err.exit_code(),
            Self::Unknown(_) => 2,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_config() {
        let err = Error::invalid_config("test error");
        assert_eq!(err.to_string(), "Invalid configuration: test error");
    }

    #[test]
    fn test_error_display_database_error() {
        let err = Error::database_error("connection failed");
        assert_eq!(err.to_string(), "Database error: connection failed");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::System(_)));
    }

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(Error::invalid_config("x").exit_code(), 1);
        assert_eq!(Error::parse_error("x").exit_code(), 1);
        assert_eq!(Error::io_error("x").exit_code(), 2);
        assert_eq!(Error::watch_error("/d", "x").exit_code(), 2);
        assert_eq!(Error::database_error("x").exit_code(), 4);
        assert_eq!(Error::unknown("x").exit_code(), 2);
    }

    #[test]
    fn test_error_debug() {
        let err = Error::invalid_config("test");
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Validation"));
    }
}
