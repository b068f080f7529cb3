//! Change source backed by `notify`
//!
//! The watcher callback runs on notify's own thread and forwards into two
//! bounded tokio channels with blocking sends. When the relay falls behind,
//! the callback blocks and notify buffers (or drops) per its backend.

use std::path::Path;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use super::event::{ChangeEvent, SourceError};
use crate::{Error, Result};

/// Capacity of the event and error channels between notify and the relay
pub const SOURCE_CHANNEL_CAPACITY: usize = 256;

// ═══════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Starts change sources
pub struct ChangeSource;

/// A running change source: notifications, errors, and the handle that
/// keeps the watch alive
///
/// Dropping it (or its [`WatchGuard`]) stops the watch and closes both
/// streams.
pub struct ChangeStreams {
    events: mpsc::Receiver<ChangeEvent>,
    errors: mpsc::Receiver<SourceError>,
    guard: WatchGuard,
}

/// Owns the underlying watcher, if any
pub struct WatchGuard {
    _watcher: Option<RecommendedWatcher>,
}

/// Sending half of a hand-fed change source
///
/// Dropping `events` closes the notification stream, which drains the
/// pipeline.
pub struct ManualSource {
    pub events: mpsc::Sender<ChangeEvent>,
    pub errors: mpsc::Sender<SourceError>,
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

impl ChangeSource {
    /// Watch `directory` for changes
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `directory` does not exist or is not a directory
    /// - The platform watcher cannot be created
    /// - The watch cannot be registered (permissions, watch limits)
    pub fn watch(directory: &Path, recursive: bool) -> Result<ChangeStreams> {
        if !directory.is_dir() {
            return Err(Error::watch_error(
                directory.display().to_string(),
                "not an existing directory",
            ));
        }

        let (events_tx, events) = mpsc::channel(SOURCE_CHANNEL_CAPACITY);
        let (errors_tx, errors) = mpsc::channel(SOURCE_CHANNEL_CAPACITY);

        let mut watcher = notify::recommended_watcher(
            move |res: notify::Result<notify::Event>| match res {
                Ok(event) => {
                    for change in ChangeEvent::from_notify(event) {
                        if events_tx.blocking_send(change).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    let _ = errors_tx.blocking_send(SourceError::from(err));
                }
            },
        )
        .map_err(|e| Error::watch_error("", e.to_string()))?;

        let mode = if recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };

        watcher
            .watch(directory, mode)
            .map_err(|e| Error::watch_error(directory.display().to_string(), e.to_string()))?;

        tracing::info!(
            directory = %directory.display(),
            recursive,
            "watching directory"
        );

        Ok(ChangeStreams {
            events,
            errors,
            guard: WatchGuard {
                _watcher: Some(watcher),
            },
        })
    }
}

impl ChangeStreams {
    /// A change source fed by hand through the returned [`ManualSource`]
    pub fn manual(capacity: usize) -> (ManualSource, Self) {
        let (events_tx, events) = mpsc::channel(capacity.max(1));
        let (errors_tx, errors) = mpsc::channel(capacity.max(1));

        (
            ManualSource {
                events: events_tx,
                errors: errors_tx,
            },
            Self {
                events,
                errors,
                guard: WatchGuard { _watcher: None },
            },
        )
    }

    /// Split into the two streams plus the guard that keeps the watch alive
    pub fn into_parts(
        self,
    ) -> (
        mpsc::Receiver<ChangeEvent>,
        mpsc::Receiver<SourceError>,
        WatchGuard,
    ) {
        (self.events, self.errors, self.guard)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
