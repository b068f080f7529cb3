//! Concurrent ingestion pipeline
//!
//! - `queue`: bounded FIFO of work items, one producer and N consumers
//! - `worker`: stat → read → insert for one path at a time
//! - `coordinator`: lifecycle (`Starting → Running → Draining`), relay task
//!   and worker pool

pub mod coordinator;
pub mod queue;
pub mod worker;

pub use coordinator::{Coordinator, PipelineReport, PipelineState};
pub use queue::{DispatchQueue, QueueClosed, QueueReceiver, QueueSender, WorkItem};
pub use worker::{process_item, run_worker, ItemError, ItemOutcome, WorkerStats};
