//! # fwatch Core
//!
//! File-activity ledger: watches a directory, and for every created or
//! written file appends `(path, byte count)` to a SQLite table.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Pipeline
//!
//! ```text
//! ChangeSource ─► normalize ─► DispatchQueue(cap = concurrency) ─► workers ─► RecordStore
//! ```
//!
//! The [`Coordinator`] owns the lifecycle: it prepares the store, starts the
//! change source, spawns a fixed worker pool and returns once the source
//! closes and every worker has drained.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
mod error;
pub mod pipeline;
pub mod result;
pub mod shutdown;
pub mod store;
pub mod watcher;

pub use config::{Config, SizeMode};
pub use error::{Error, ExecutionError, SystemError, ValidationError};
pub use pipeline::{
    Coordinator, DispatchQueue, ItemError, PipelineReport, PipelineState, QueueReceiver,
    QueueSender, WorkItem, WorkerStats,
};
pub use result::Result;
pub use shutdown::{ShutdownSignal, TerminationSignals};
pub use store::{FileRecord, RecordStore, SqliteStore};
pub use watcher::{normalize, ChangeEvent, ChangeKind, ChangeSource, ChangeStreams, SourceError};
