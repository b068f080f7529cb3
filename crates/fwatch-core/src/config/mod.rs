//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: ~/.config/fwatch/config.toml
//! 3. Project config: ./config/config.toml
//! 4. Explicit file passed with `--config` (must exist)
//! 5. Environment variables: FWATCH_*
//! 6. CLI flags
//!
//! The result is validated once and never changes afterwards.
//!
//! # Example Config
//!
//! ```toml
//! directory = "/srv/inbox"
//! database = "/var/lib/fwatch/file_data.db"
//! concurrency = 4
//! recursive = false
//! size_mode = "read"
//! ```
//!
//! # Module Structure
//!
//! - `types`: Configuration structure definitions
//! - `defaults`: Default value implementations
//! - `load`: Loading from files and environment
//! - `merge`: Layer merging logic
//! - `validate`: Validation

mod defaults;
mod load;
mod merge;
mod types;
mod validate;

#[cfg(test)]
mod tests_loading;
#[cfg(test)]
mod tests_validation;

pub use defaults::{DEFAULT_CONCURRENCY, DEFAULT_DATABASE, MAX_CONCURRENCY};
pub use load::{
    global_config_path, load_config, load_toml_file, project_config_path, ENV_PREFIX,
};
pub use types::{Config, ConfigOverrides, SizeMode};
