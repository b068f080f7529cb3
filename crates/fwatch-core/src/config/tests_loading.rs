//! Loading-focused tests for configuration
//!
//! Tests for file parsing, layer precedence and environment overrides.

#[cfg(test)]
mod loading_tests {
    use std::{collections::HashMap, path::PathBuf};

    use crate::config::{
        load::{env_overrides, resolve},
        load_toml_file, project_config_path, Config, ConfigOverrides, SizeMode,
    };
    use crate::{Error, Result};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> Result<PathBuf> {
        let path = dir.path().join(name);
        std::fs::write(&path, body)
            .map_err(|e| Error::io_error(format!("Failed to write test file: {e}")))?;
        Ok(path)
    }

    #[test]
    fn test_no_config_files_returns_defaults() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let config = resolve(
            None,
            &dir.path().join("config/config.toml"),
            None,
            no_env,
            ConfigOverrides::default(),
        )?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_project_file_overrides_global_file() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let global = write_file(
            &dir,
            "global.toml",
            "directory = \"/global\"\nconcurrency = 8\n",
        )?;
        let project = write_file(&dir, "project.toml", "concurrency = 3\n")?;

        let config = resolve(
            Some(&global),
            &project,
            None,
            no_env,
            ConfigOverrides::default(),
        )?;

        assert_eq!(config.directory, PathBuf::from("/global"));
        assert_eq!(config.concurrency, 3);
        Ok(())
    }

    #[test]
    fn test_flags_override_env_and_files() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let explicit = write_file(
            &dir,
            "fwatch.toml",
            "database = \"from_file.db\"\nconcurrency = 6\n",
        )?;
        let env = env_from(&[("FWATCH_DATABASE", "from_env.db"), ("FWATCH_CONCURRENCY", "5")]);
        let flags = ConfigOverrides {
            concurrency: Some(2),
            ..Default::default()
        };

        let config = resolve(
            None,
            &dir.path().join("absent.toml"),
            Some(&explicit),
            env,
            flags,
        )?;

        assert_eq!(config.database, "from_env.db");
        assert_eq!(config.concurrency, 2);
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_error() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let missing = dir.path().join("nope.toml");

        let result = resolve(
            None,
            &dir.path().join("absent.toml"),
            Some(&missing),
            no_env,
            ConfigOverrides::default(),
        );

        assert!(matches!(result, Err(Error::Validation(_))));
        if let Err(e) = result {
            assert!(e.to_string().contains("nope.toml"));
        }
        Ok(())
    }

    #[test]
    fn test_malformed_toml_returns_parse_error() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let path = write_file(&dir, "bad.toml", "directory = \n invalid toml [[[")?;

        let result = load_toml_file(&path);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("parse"));
        }
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let path = write_file(&dir, "typo.toml", "concurrancy = 2\n")?;

        assert!(load_toml_file(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_directory_as_config_path_is_error() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let result = load_toml_file(dir.path());
        assert!(matches!(result, Err(Error::System(_))));
        Ok(())
    }

    #[test]
    fn test_size_mode_parses_from_file() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let path = write_file(&dir, "mode.toml", "size_mode = \"metadata\"\n")?;

        let layer = load_toml_file(&path)?;
        assert_eq!(layer.size_mode, Some(SizeMode::Metadata));
        Ok(())
    }

    #[test]
    fn test_env_overrides_parse_all_fields() -> Result<()> {
        let env = env_from(&[
            ("FWATCH_DIRECTORY", "/srv/inbox"),
            ("FWATCH_DATABASE", "ledger.db"),
            ("FWATCH_CONCURRENCY", " 7 "),
            ("FWATCH_RECURSIVE", "true"),
            ("FWATCH_SIZE_MODE", "Metadata"),
        ]);

        let layer = env_overrides(env)?;
        assert_eq!(layer.directory, Some(PathBuf::from("/srv/inbox")));
        assert_eq!(layer.database.as_deref(), Some("ledger.db"));
        assert_eq!(layer.concurrency, Some(7));
        assert_eq!(layer.recursive, Some(true));
        assert_eq!(layer.size_mode, Some(SizeMode::Metadata));
        Ok(())
    }

    #[test]
    fn test_env_invalid_values_are_errors() {
        assert!(env_overrides(env_from(&[("FWATCH_CONCURRENCY", "many")])).is_err());
        assert!(env_overrides(env_from(&[("FWATCH_RECURSIVE", "yes")])).is_err());
        assert!(env_overrides(env_from(&[("FWATCH_SIZE_MODE", "guess")])).is_err());
        assert!(env_overrides(env_from(&[("FWATCH_DATABASE", "  ")])).is_err());
    }

    #[test]
    fn test_project_config_path() {
        let result = project_config_path();
        assert!(result.is_ok());
        let path = result.unwrap_or_default();
        assert!(path.ends_with("config/config.toml"));
    }

    #[test]
    fn test_flags_apply_over_defaults_without_files_or_env() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let flags = ConfigOverrides {
            directory: Some(dir.path().to_path_buf()),
            concurrency: Some(3),
            ..Default::default()
        };

        let config = resolve(
            Some(&dir.path().join("global/config.toml")),
            &dir.path().join("config/config.toml"),
            None,
            no_env,
            flags,
        )?;
        assert_eq!(config.directory, dir.path());
        assert_eq!(config.concurrency, 3);
        assert_eq!(config.database, Config::default().database);
        Ok(())
    }
}
