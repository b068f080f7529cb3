//! Execution error types for the record store.

use std::fmt;

/// Execution errors represent problems with the record store.
#[derive(Debug, Clone)]
pub enum ExecutionError {
    /// Database operation failed
    DatabaseError(String),
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl ExecutionError {
    /// Get exit code for execution errors.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::DatabaseError(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = ExecutionError::DatabaseError("disk I/O error".to_string());
        assert_eq!(err.to_string(), "Database error: disk I/O error");
        assert_eq!(err.exit_code(), 4);
    }
}
