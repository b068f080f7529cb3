//! Validation-focused tests for configuration

#[cfg(test)]
mod validation_tests {
    use std::path::PathBuf;

    use crate::config::{Config, SizeMode, MAX_CONCURRENCY};

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = Config {
            concurrency: 0,
            ..Default::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("concurrency must be 1-"));
        }
    }

    #[test]
    fn test_concurrency_upper_bound() {
        let at_max = Config {
            concurrency: MAX_CONCURRENCY,
            ..Default::default()
        };
        let above = Config {
            concurrency: MAX_CONCURRENCY + 1,
            ..Default::default()
        };
        assert!(at_max.validate().is_ok());
        assert!(above.validate().is_err());
    }

    #[test]
    fn test_empty_directory_rejected() {
        let config = Config {
            directory: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_database_rejected() {
        let config = Config {
            database: "   ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_size_mode_from_str() {
        assert_eq!("read".parse::<SizeMode>().ok(), Some(SizeMode::Read));
        assert_eq!(" METADATA ".parse::<SizeMode>().ok(), Some(SizeMode::Metadata));
        assert!("bytes".parse::<SizeMode>().is_err());
        assert_eq!(SizeMode::Metadata.to_string(), "metadata");
    }
}
