//! Configuration merging logic (Immutable functional pattern)
//!
//! Later layers override earlier ones (defaults → global → project →
//! explicit file → env → CLI). Every merge returns a new value.

use super::types::{Config, ConfigOverrides};

impl Config {
    /// Apply one layer on top of this config - immutable pattern
    pub fn apply(self, layer: ConfigOverrides) -> Self {
        Self {
            directory: layer.directory.unwrap_or(self.directory),
            database: layer.database.unwrap_or(self.database),
            concurrency: layer.concurrency.unwrap_or(self.concurrency),
            recursive: layer.recursive.unwrap_or(self.recursive),
            size_mode: layer.size_mode.unwrap_or(self.size_mode),
        }
    }
}

impl ConfigOverrides {
    /// True when no field is set
    pub const fn is_empty(&self) -> bool {
        self.directory.is_none()
            && self.database.is_none()
            && self.concurrency.is_none()
            && self.recursive.is_none()
            && self.size_mode.is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::SizeMode;

    #[test]
    fn test_apply_empty_layer_is_identity() {
        let config = Config::default();
        assert_eq!(config.clone().apply(ConfigOverrides::default()), config);
    }

    #[test]
    fn test_apply_overrides_only_set_fields() {
        let layer = ConfigOverrides {
            database: Some("ledger.db".to_string()),
            concurrency: Some(2),
            ..Default::default()
        };
        let config = Config::default().apply(layer);

        assert_eq!(config.database, "ledger.db");
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.directory, PathBuf::from("."));
        assert_eq!(config.size_mode, SizeMode::Read);
    }

    #[test]
    fn test_is_empty_tracks_any_set_field() {
        assert!(ConfigOverrides::default().is_empty());
        let layer = ConfigOverrides {
            recursive: Some(false),
            ..Default::default()
        };
        assert!(!layer.is_empty());
    }
}
