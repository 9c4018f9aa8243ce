//! Native notification event source
//!
//! Subscribes to the watch target with `notify` (non-recursive). Every
//! create/modify notification is stat'ed and then goes through the same
//! (path, modification time) de-duplication as the polling source, so editor
//! save bursts collapse into one event per actual change. A path whose stat
//! fails for any reason other than "not found" is stat'ed again on the next
//! call instead of being dropped.

use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::debug;

use super::seen::SeenFiles;
use crate::domain::entities::FileEvent;
use crate::domain::ports::{DirectoryLister, EventSourceError, FileEventSource};
use crate::domain::value_objects::WatchTarget;
use crate::error::{WardenError, WardenResult};
use crate::infrastructure::fs::LocalDirectoryLister;

pub struct NotifyEventSource {
    target: WatchTarget,
    rx: Receiver<notify::Result<Event>>,
    watcher: Option<RecommendedWatcher>,
    seen: SeenFiles,
    queue: VecDeque<FileEvent>,
    retry: HashSet<PathBuf>,
}

impl NotifyEventSource {
    pub fn new(target: WatchTarget) -> WardenResult<Self> {
        let mut seen = SeenFiles::default();
        for item in LocalDirectoryLister::new().list(target.path())? {
            match item {
                Ok(stamp) => seen.record_baseline(stamp.path, stamp.modified),
                Err(e) => seen.record_unstamped_baseline(e.path),
            }
        }

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .map_err(|e| WardenError::Watcher(e.to_string()))?;

        watcher
            .watch(target.path(), RecursiveMode::NonRecursive)
            .map_err(|e| WardenError::Watcher(e.to_string()))?;

        Ok(Self {
            target,
            rx,
            watcher: Some(watcher),
            seen,
            queue: VecDeque::new(),
            retry: HashSet::new(),
        })
    }

    fn ingest(&mut self, event: Event) {
        let removal = matches!(event.kind, EventKind::Remove(_));
        if !removal && !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
            return;
        }

        for raw in event.paths {
            // Key on target-relative paths so they match the baseline listing
            let Some(path) = self.local_path(&raw) else {
                continue;
            };
            if removal {
                self.seen.forget(&path);
                self.retry.remove(&path);
                continue;
            }
            if !self.target.accepts(&path) {
                continue;
            }
            self.stat_and_queue(path);
        }
    }

    fn stat_and_queue(&mut self, path: PathBuf) {
        let modified = match std::fs::metadata(&path) {
            Ok(meta) if !meta.is_file() => return,
            Ok(meta) => meta.modified(),
            Err(e) => Err(e),
        };
        match modified {
            Ok(modified) => {
                if let Some(file_event) = self.seen.observe(&path, modified) {
                    self.queue.push_back(file_event);
                }
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::Unsupported) => {
                debug!(path = %path.display(), "skipping: {e}");
            }
            Err(e) => {
                debug!(path = %path.display(), "stat failed, retrying: {e}");
                self.retry.insert(path);
            }
        }
    }

    fn retry_stats(&mut self) {
        for path in std::mem::take(&mut self.retry) {
            self.stat_and_queue(path);
        }
    }

    fn local_path(&self, raw: &Path) -> Option<PathBuf> {
        raw.file_name().map(|name| self.target.path().join(name))
    }
}

impl FileEventSource for NotifyEventSource {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<FileEvent>, EventSourceError> {
        self.retry_stats();
        if let Some(event) = self.queue.pop_front() {
            return Ok(Some(event));
        }
        match self.rx.recv_timeout(timeout) {
            Ok(Ok(event)) => {
                self.ingest(event);
                // Drain whatever else is already buffered
                while let Ok(res) = self.rx.try_recv() {
                    match res {
                        Ok(event) => self.ingest(event),
                        Err(e) => debug!("watcher error: {e}"),
                    }
                }
                Ok(self.queue.pop_front())
            }
            Ok(Err(e)) => Err(EventSourceError::Watcher(e.to_string())),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                std::thread::sleep(timeout);
                Err(EventSourceError::Watcher("notification channel closed".into()))
            }
        }
    }

    fn stop(&mut self) {
        self.watcher.take();
        self.queue.clear();
        self.retry.clear();
    }
}
