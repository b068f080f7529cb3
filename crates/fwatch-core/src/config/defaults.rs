//! Default configuration values

use std::path::PathBuf;

use super::types::{Config, SizeMode};

/// Database file used when nothing else is configured
pub const DEFAULT_DATABASE: &str = "file_data.db";

/// Worker count used when nothing else is configured
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Upper bound accepted for `concurrency`
pub const MAX_CONCURRENCY: usize = 1024;

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            database: DEFAULT_DATABASE.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            recursive: false,
            size_mode: SizeMode::default(),
        }
    }
}
