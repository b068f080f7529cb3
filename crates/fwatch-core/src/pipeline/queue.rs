//! Bounded dispatch queue between the relay and the worker pool
//!
//! Capacity equals the worker count. `enqueue` waits while the queue is full;
//! that wait is the only backpressure in the system. Workers share one
//! receiver behind an async mutex, so each item goes to exactly one worker in
//! FIFO admission order.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;
use tokio::sync::{mpsc, Mutex};

// ═══════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// A path awaiting processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem(PathBuf);

/// Returned by [`QueueSender::enqueue`] when every worker is gone
#[derive(Debug, Error)]
#[error("dispatch queue closed, dropping {}", .0.path().display())]
pub struct QueueClosed(pub WorkItem);

/// Constructor namespace for the queue halves
pub struct DispatchQueue;

/// Producer half, owned by the relay task
///
/// Dropping it closes the queue.
#[derive(Debug)]
pub struct QueueSender {
    tx: mpsc::Sender<WorkItem>,
}

/// Consumer half, cloned once per worker
#[derive(Debug, Clone)]
pub struct QueueReceiver {
    rx: Arc<Mutex<mpsc::Receiver<WorkItem>>>,
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

impl WorkItem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn into_path(self) -> PathBuf {
        self.0
    }
}

impl DispatchQueue {
    /// Create a queue holding at most `capacity` items (minimum 1)
    pub fn bounded(capacity: usize) -> (QueueSender, QueueReceiver) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            QueueSender { tx },
            QueueReceiver {
                rx: Arc::new(Mutex::new(rx)),
            },
        )
    }
}

impl QueueSender {
    /// Append an item, waiting while the queue is full
    ///
    /// # Errors
    ///
    /// Returns [`QueueClosed`] with the item if no receiver is left
    pub async fn enqueue(&self, item: WorkItem) -> Result<(), QueueClosed> {
        self.tx
            .send(item)
            .await
            .map_err(|mpsc::error::SendError(item)| QueueClosed(item))
    }

    /// True when the next `enqueue` would wait
    pub fn is_full(&self) -> bool {
        self.tx.capacity() == 0
    }

    /// Total number of slots
    pub fn max_capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}

impl QueueReceiver {
    /// Take the next item, or `None` once the queue is closed and empty
    pub async fn dequeue(&self) -> Option<WorkItem> {
        self.rx.lock().await.recv().await
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
