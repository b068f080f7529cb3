//! Configuration type definitions
//!
//! Pure data holders. Behavior lives in the sibling modules.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

// ═══════════════════════════════════════════════════════════════════════════
// MAIN CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════

/// Fully resolved, validated configuration
///
/// Built once at startup and handed by reference to the coordinator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Directory whose files are watched
    pub directory: PathBuf,
    /// SQLite database path, or `:memory:`
    pub database: String,
    /// Worker count; also the dispatch queue capacity
    pub concurrency: usize,
    /// Watch subdirectories too
    pub recursive: bool,
    /// How a worker measures a file's byte count
    pub size_mode: SizeMode,
}

/// How a worker determines `byte_count`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    /// Read the whole file and count the bytes
    #[default]
    Read,
    /// Trust the length reported by file metadata
    Metadata,
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Metadata => write!(f, "metadata"),
        }
    }
}

impl FromStr for SizeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "metadata" => Ok(Self::Metadata),
            other => Err(Error::invalid_config(format!(
                "size_mode must be 'read' or 'metadata', got '{other}'"
            ))),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PARTIAL LAYER
// ═══════════════════════════════════════════════════════════════════════════

/// One configuration layer (a file, the environment, or CLI flags)
///
/// Unset fields leave the lower layer untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_mode: Option<SizeMode>,
}
