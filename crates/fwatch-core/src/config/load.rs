//! Configuration loading from files and environment (Immutable functional pattern)
//!
//! This module handles loading configuration from:
//! 1. Built-in defaults
//! 2. Global config: ~/.config/fwatch/config.toml
//! 3. Project config: ./config/config.toml
//! 4. Explicit config file
//! 5. Environment variables: FWATCH_*
//! 6. CLI flags
//!
//! All operations return new instances rather than mutating in place.

use std::path::{Path, PathBuf};

use super::types::{Config, ConfigOverrides, SizeMode};
use crate::{Error, Result};

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "FWATCH_";

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources and validate it
///
/// `explicit` is a file the user asked for by name; unlike the global and
/// project files it must exist. `flags` is the CLI layer.
///
/// # Errors
///
/// Returns error if:
/// - A config file is unreadable or malformed TOML
/// - The explicit config file does not exist
/// - An `FWATCH_*` variable holds an invalid value
/// - The merged values fail validation
pub fn load_config(explicit: Option<&Path>, flags: ConfigOverrides) -> Result<Config> {
    let project = project_config_path()?;
    resolve(
        global_config_path().as_deref(),
        &project,
        explicit,
        |key| std::env::var(key).ok(),
        flags,
    )
}

/// Layer every source in order, then validate
pub(crate) fn resolve(
    global: Option<&Path>,
    project: &Path,
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    flags: ConfigOverrides,
) -> Result<Config> {
    let config = Config::default();

    let config = match global {
        Some(path) if path.exists() => config.apply(load_toml_file(path)?),
        _ => config,
    };

    let config = if project.exists() {
        config.apply(load_toml_file(project)?)
    } else {
        config
    };

    let config = match explicit {
        Some(path) if !path.exists() => {
            return Err(Error::invalid_config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Some(path) => config.apply(load_toml_file(path)?),
        None => config,
    };

    let config = config.apply(env_overrides(env)?).apply(flags);

    config.validate()?;
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "fwatch")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Get path to project config file
///
/// # Errors
///
/// Returns error if current directory cannot be determined
pub fn project_config_path() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|dir| dir.join("config").join("config.toml"))
        .map_err(|e| Error::io_error(format!("Failed to get current directory: {e}")))
}

/// Load a TOML file into a configuration layer
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - Path is a directory instead of a file
/// - TOML is malformed or has unknown keys
pub fn load_toml_file(path: &Path) -> Result<ConfigOverrides> {
    if path.is_dir() {
        return Err(Error::io_error(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io_error(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::parse_error(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// ENVIRONMENT VARIABLE OVERRIDES
// ═══════════════════════════════════════════════════════════════════════════

/// Build a layer from `FWATCH_*` variables
pub(crate) fn env_overrides(env: impl Fn(&str) -> Option<String>) -> Result<ConfigOverrides> {
    let var = |name: &str| env(&format!("{ENV_PREFIX}{name}"));

    let directory = var("DIRECTORY")
        .map(|value| non_empty("FWATCH_DIRECTORY", value).map(PathBuf::from))
        .transpose()?;

    let database = var("DATABASE")
        .map(|value| non_empty("FWATCH_DATABASE", value))
        .transpose()?;

    let concurrency = var("CONCURRENCY")
        .map(|value| {
            value.trim().parse::<usize>().map_err(|e| {
                Error::invalid_config(format!("Invalid FWATCH_CONCURRENCY value: {e}"))
            })
        })
        .transpose()?;

    let recursive = var("RECURSIVE")
        .map(|value| {
            value.trim().parse::<bool>().map_err(|e| {
                Error::invalid_config(format!("Invalid FWATCH_RECURSIVE value: {e}"))
            })
        })
        .transpose()?;

    let size_mode = var("SIZE_MODE")
        .map(|value| value.parse::<SizeMode>())
        .transpose()?;

    Ok(ConfigOverrides {
        directory,
        database,
        concurrency,
        recursive,
        size_mode,
    })
}

fn non_empty(name: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        Err(Error::invalid_config(format!(
            "{name} cannot be empty - unset the variable or provide a value"
        )))
    } else {
        Ok(value)
    }
}
