//! Configuration validation

use super::{defaults::MAX_CONCURRENCY, types::Config};
use crate::{Error, Result};

impl Config {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any values are out of range or empty
    pub fn validate(&self) -> Result<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(Error::validation_error(
                "directory cannot be empty - set it in config.toml or pass --directory",
            ));
        }

        if self.database.trim().is_empty() {
            return Err(Error::validation_error(
                "database cannot be empty - set it in config.toml or pass --database",
            ));
        }

        if self.concurrency == 0 || self.concurrency > MAX_CONCURRENCY {
            return Err(Error::validation_error(format!(
                "concurrency must be 1-{MAX_CONCURRENCY}, got {}",
                self.concurrency
            )));
        }

        Ok(())
    }
}
