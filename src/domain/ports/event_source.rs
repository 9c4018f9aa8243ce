//! FileEventSource port - intake of observed file changes

use std::time::Duration;

use thiserror::Error;

use crate::domain::entities::FileEvent;
use crate::error::DirectoryError;

/// Failure while pulling events. The controller reports it and keeps going.
#[derive(Debug, Error)]
pub enum EventSourceError {
    /// The directory vanished or became unreadable after startup
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The native notifier reported an error
    #[error("watcher error: {0}")]
    Watcher(String),
}

/// A lazy, unbounded stream of `FileEvent`s for one watch target.
///
/// Sources never read file contents and never emit the same
/// (path, modification time) pair twice.
pub trait FileEventSource {
    /// Wait up to `timeout` for the next event.
    ///
    /// `Ok(None)` means nothing arrived in time; the stream is not finished.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<FileEvent>, EventSourceError>;

    /// Release watcher resources. Called once when the controller stops.
    fn stop(&mut self) {}
}
