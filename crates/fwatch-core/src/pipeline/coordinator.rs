//! Pipeline coordinator
//!
//! Lifecycle:
//!
//! ```text
//! Starting ──► Running ──► Draining ──► (run returns)
//! ```
//!
//! - `Starting`: open the store, create the table, start the change source,
//!   spawn exactly `concurrency` workers. Any failure here is fatal.
//! - `Running`: the relay loop forwards normalized events into the dispatch
//!   queue and logs source errors. There is no stop command; the process is
//!   ended from outside, abandoning whatever is in flight.
//! - `Draining`: entered only when the source's event stream closes. The
//!   queue is closed, workers finish what is queued and exit.

use std::sync::Arc;

use tokio::{sync::watch, task::JoinSet};

use super::{
    queue::{DispatchQueue, QueueSender},
    worker::{run_worker, WorkerStats},
};
use crate::{
    config::Config,
    store::{RecordStore, SqliteStore},
    watcher::{normalize, ChangeSource, ChangeStreams},
    Result,
};

// ═══════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Coordinator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Starting,
    Running,
    Draining,
}

/// Totals for one pipeline run, available once it has drained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Workers spawned
    pub workers: usize,
    /// Work items handed to the queue
    pub dispatched: u64,
    /// Events dropped by the normalizer
    pub ignored_events: u64,
    /// Errors reported by the change source
    pub source_errors: u64,
    /// Records inserted
    pub recorded: u64,
    /// Items that turned out to be directories
    pub skipped_directories: u64,
    /// Items abandoned after a stat, read or insert failure
    pub failed: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct RelayStats {
    dispatched: u64,
    ignored_events: u64,
    source_errors: u64,
}

/// Owns the configuration and drives one pipeline run
pub struct Coordinator {
    config: Config,
    state: watch::Sender<PipelineState>,
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

impl Coordinator {
    pub fn new(config: Config) -> Self {
        let (state, _) = watch::channel(PipelineState::Starting);
        Self { config, state }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Observe lifecycle transitions
    pub fn subscribe_state(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    /// Open the SQLite store, watch the configured directory and run until
    /// the change source closes
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be opened, the table cannot be
    /// created, or the directory cannot be watched. Nothing has been spawned
    /// when any of these fail.
    pub async fn run(&self) -> Result<PipelineReport> {
        self.transition(PipelineState::Starting);

        let max_connections = u32::try_from(self.config.concurrency).unwrap_or(u32::MAX);
        let store = SqliteStore::open(&self.config.database, max_connections).await?;
        store.ensure_schema().await?;

        let streams = ChangeSource::watch(&self.config.directory, self.config.recursive)?;

        self.run_with(Arc::new(store), streams).await
    }

    /// Run the pipeline over an already prepared store and started source
    ///
    /// Returns once `streams` has closed and every worker has exited.
    /// Dropping the returned future releases the watch and aborts the
    /// workers.
    ///
    /// # Errors
    ///
    /// Never fails once started; the `Result` mirrors [`Self::run`]
    pub async fn run_with(
        &self,
        store: Arc<dyn RecordStore>,
        streams: ChangeStreams,
    ) -> Result<PipelineReport> {
        self.transition(PipelineState::Starting);

        let workers = self.config.concurrency;
        let size_mode = self.config.size_mode;
        let (sender, receiver) = DispatchQueue::bounded(workers);

        // Dropping the set aborts every worker, so cancelling this future
        // stops the whole pipeline.
        let mut pool = JoinSet::new();
        for id in 0..workers {
            pool.spawn(run_worker(
                id,
                receiver.clone(),
                Arc::clone(&store),
                size_mode,
            ));
        }
        drop(receiver);

        self.transition(PipelineState::Running);

        let relayed = relay(streams, sender).await;

        self.transition(PipelineState::Draining);

        let mut totals = WorkerStats::default();
        while let Some(joined) = pool.join_next().await {
            match joined {
                Ok(stats) => totals = totals.combine(stats),
                Err(e) => tracing::error!(error = %e, "worker task failed"),
            }
        }

        let report = PipelineReport {
            workers,
            dispatched: relayed.dispatched,
            ignored_events: relayed.ignored_events,
            source_errors: relayed.source_errors,
            recorded: totals.recorded,
            skipped_directories: totals.skipped_directories,
            failed: totals.failed,
        };
        tracing::info!(?report, "pipeline drained");
        Ok(report)
    }

    fn transition(&self, next: PipelineState) {
        let previous = self.state.send_replace(next);
        if previous != next {
            tracing::info!(from = ?previous, to = ?next, "pipeline state");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RELAY
// ═══════════════════════════════════════════════════════════════════════════

/// Forward normalized events into the queue until the event stream closes
///
/// Owns the change source; its watch is released when this returns or is
/// dropped, and dropping `queue` closes the dispatch queue.
async fn relay(streams: ChangeStreams, queue: QueueSender) -> RelayStats {
    let (mut events, mut errors, _guard) = streams.into_parts();
    let mut stats = RelayStats::default();
    let mut errors_open = true;

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                let Some(item) = normalize(event) else {
                    stats.ignored_events += 1;
                    continue;
                };
                if queue.is_full() {
                    tracing::debug!(
                        path = %item.path().display(),
                        capacity = queue.max_capacity(),
                        "dispatch queue full, waiting"
                    );
                }
                if let Err(closed) = queue.enqueue(item).await {
                    tracing::error!(error = %closed, "no workers left");
                    break;
                }
                stats.dispatched += 1;
            }
            error = errors.recv(), if errors_open => match error {
                Some(error) => {
                    stats.source_errors += 1;
                    tracing::warn!(error = %error, paths = ?error.paths, "change source error");
                }
                None => errors_open = false,
            },
        }
    }

    tracing::info!("change source closed");
    stats
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
