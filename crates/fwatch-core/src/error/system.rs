//! System error types for IO and directory watching.
//!
//! These errors represent failures in system operations that are typically
//! out of the user's direct control.

use std::fmt;

/// System errors represent failures in IO or the change source.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// IO operation failed
    IoError(String),
    /// The watch on a directory could not be created or started
    WatchFailed { path: String, source: String },
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
            Self::WatchFailed { path, source } if path.is_empty() => {
                write!(f, "Failed to start file watcher: {source}")
            }
            Self::WatchFailed { path, source } => {
                write!(f, "Failed to watch {path}: {source}")
            }
        }
    }
}

impl SystemError {
    /// Get exit code for system errors (always 2).
    pub const fn exit_code(&self) -> i32 {
        2
    }
}
