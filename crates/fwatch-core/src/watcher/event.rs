//! Change notifications as the pipeline sees them

use std::path::PathBuf;

use notify::{event::ModifyKind, EventKind};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Kind of change observed on a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Path was created
    Created,
    /// File contents were written
    Modified,
    /// Anything else: metadata, rename, remove, access
    Other,
}

/// One path plus the kind of change observed on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

/// Error reported by the change source while running
///
/// Never fatal: the relay logs it and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
    pub paths: Vec<PathBuf>,
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERSIONS
// ═══════════════════════════════════════════════════════════════════════════

impl From<&EventKind> for ChangeKind {
    fn from(kind: &EventKind) -> Self {
        match kind {
            EventKind::Create(_) => Self::Created,
            EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => Self::Modified,
            _ => Self::Other,
        }
    }
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Split a `notify` event into one `ChangeEvent` per path
    pub fn from_notify(event: notify::Event) -> impl Iterator<Item = Self> {
        let kind = ChangeKind::from(&event.kind);
        event
            .paths
            .into_iter()
            .map(move |path| Self { path, kind })
    }
}

impl From<notify::Error> for SourceError {
    fn from(err: notify::Error) -> Self {
        Self {
            message: err.to_string(),
            paths: err.paths,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
