//! Change source and event normalization
//!
//! The change source turns raw `notify` callbacks into two bounded streams:
//! [`ChangeEvent`]s and [`SourceError`]s. The normalizer keeps only creates
//! and data writes and reduces them to a bare path for the dispatch queue.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use fwatch_core::watcher::{normalize, ChangeSource};
//!
//! # async fn example() -> fwatch_core::Result<()> {
//! let streams = ChangeSource::watch(Path::new("/srv/inbox"), false)?;
//! let (mut events, _errors, _guard) = streams.into_parts();
//!
//! while let Some(event) = events.recv().await {
//!     if let Some(item) = normalize(event) {
//!         println!("changed: {}", item.path().display());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod event;
pub mod normalize;
pub mod source;

pub use event::{ChangeEvent, ChangeKind, SourceError};
pub use normalize::normalize;
pub use source::{ChangeSource, ChangeStreams, ManualSource, WatchGuard, SOURCE_CHANNEL_CAPACITY};
