//! File Event Sources
//!
//! Two implementations of the `FileEventSource` port with the same emission
//! contract: files present at startup are the baseline, and a file is
//! emitted again only when its modification time changes.

mod native;
mod poll;
mod seen;

pub use native::NotifyEventSource;
pub use poll::{PollingEventSource, DEFAULT_POLL_INTERVAL};
