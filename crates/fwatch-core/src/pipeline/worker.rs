//! Worker: turns one work item into at most one record
//!
//! Every failure is scoped to the item: it is logged and the worker moves on
//! to the next path. Nothing is retried. A worker exits only when the queue
//! is closed and empty.

use std::sync::Arc;

use thiserror::Error;

use super::queue::{QueueReceiver, WorkItem};
use crate::{config::SizeMode, store::RecordStore};

// ═══════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// What happened to a successfully handled item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// A record was inserted
    Recorded { id: i64, byte_count: i64 },
    /// The path is a directory; nothing to record
    SkippedDirectory,
}

/// Why an item was abandoned
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("failed to stat {path}: {source}")]
    Stat {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("size of {path} ({len} bytes) does not fit in a record")]
    Oversized { path: String, len: u64 },

    #[error("failed to insert record for {path}: {source}")]
    Insert { path: String, source: crate::Error },
}

/// Per-worker counters, returned when the worker exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub recorded: u64,
    pub skipped_directories: u64,
    pub failed: u64,
}

impl ItemError {
    /// The step that failed
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Stat { .. } => "stat",
            Self::Read { .. } | Self::Oversized { .. } => "read",
            Self::Insert { .. } => "insert",
        }
    }
}

impl WorkerStats {
    fn record(&mut self, result: &Result<ItemOutcome, ItemError>) {
        match result {
            Ok(ItemOutcome::Recorded { .. }) => self.recorded += 1,
            Ok(ItemOutcome::SkippedDirectory) => self.skipped_directories += 1,
            Err(_) => self.failed += 1,
        }
    }

    /// Sum two sets of counters
    pub const fn combine(self, other: Self) -> Self {
        Self {
            recorded: self.recorded + other.recorded,
            skipped_directories: self.skipped_directories + other.skipped_directories,
            failed: self.failed + other.failed,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Stat, measure and persist one path
///
/// # Errors
///
/// Returns the [`ItemError`] for the step that failed; no record is written
/// in that case.
pub async fn process_item(
    item: &WorkItem,
    store: &dyn RecordStore,
    size_mode: SizeMode,
) -> Result<ItemOutcome, ItemError> {
    let path = item.path();
    let display = || path.to_string_lossy().into_owned();

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|source| ItemError::Stat {
            path: display(),
            source,
        })?;

    if metadata.is_dir() {
        return Ok(ItemOutcome::SkippedDirectory);
    }

    let len = match size_mode {
        SizeMode::Read => tokio::fs::read(path)
            .await
            .map(|bytes| u64::try_from(bytes.len()).unwrap_or(u64::MAX))
            .map_err(|source| ItemError::Read {
                path: display(),
                source,
            })?,
        SizeMode::Metadata => metadata.len(),
    };

    let byte_count = i64::try_from(len).map_err(|_| ItemError::Oversized {
        path: display(),
        len,
    })?;

    let file_path = display();
    let id = store
        .insert(&file_path, byte_count)
        .await
        .map_err(|source| ItemError::Insert {
            path: file_path.clone(),
            source,
        })?;

    Ok(ItemOutcome::Recorded { id, byte_count })
}

/// Worker loop: drain `queue` until it is closed
pub async fn run_worker(
    worker: usize,
    queue: QueueReceiver,
    store: Arc<dyn RecordStore>,
    size_mode: SizeMode,
) -> WorkerStats {
    let mut stats = WorkerStats::default();

    while let Some(item) = queue.dequeue().await {
        let result = process_item(&item, store.as_ref(), size_mode).await;
        stats.record(&result);

        match result {
            Ok(ItemOutcome::Recorded { id, byte_count }) => {
                tracing::debug!(
                    worker,
                    path = %item.path().display(),
                    id,
                    byte_count,
                    "recorded file"
                );
            }
            Ok(ItemOutcome::SkippedDirectory) => {}
            Err(err) => {
                tracing::warn!(
                    worker,
                    path = %item.path().display(),
                    operation = err.operation(),
                    error = %err,
                    "abandoning work item"
                );
            }
        }
    }

    tracing::debug!(worker, ?stats, "worker exiting, queue closed");
    stats
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
