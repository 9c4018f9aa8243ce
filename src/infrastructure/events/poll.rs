//! Poll-and-diff event source
//!
//! Lists the watch target every poll interval and emits files whose
//! (path, modification time) pair has not been seen. Files that cannot be
//! stat'ed are skipped for the cycle and retried on the next one.

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::seen::SeenFiles;
use crate::domain::entities::FileEvent;
use crate::domain::ports::{DirectoryLister, EventSourceError, FileEventSource};
use crate::domain::value_objects::WatchTarget;
use crate::error::DirectoryError;

/// Default interval between directory listings
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

pub struct PollingEventSource<L> {
    target: WatchTarget,
    lister: L,
    interval: Duration,
    seen: SeenFiles,
    queue: VecDeque<FileEvent>,
    next_poll: Instant,
}

impl<L: DirectoryLister> PollingEventSource<L> {
    /// Take the baseline listing. Fails if the directory cannot be listed.
    pub fn new(target: WatchTarget, lister: L, interval: Duration) -> Result<Self, DirectoryError> {
        let mut seen = SeenFiles::default();
        for item in lister.list(target.path())? {
            match item {
                Ok(stamp) => seen.record_baseline(stamp.path, stamp.modified),
                Err(e) => seen.record_unstamped_baseline(e.path),
            }
        }
        Ok(Self {
            target,
            lister,
            interval,
            seen,
            queue: VecDeque::new(),
            next_poll: Instant::now() + interval,
        })
    }

    pub fn target(&self) -> &WatchTarget {
        &self.target
    }

    /// List once and queue anything new. Exposed for deterministic tests.
    pub fn poll_once(&mut self) -> Result<usize, DirectoryError> {
        let listing = self.lister.list(self.target.path())?;

        let mut present: HashSet<PathBuf> = HashSet::with_capacity(listing.len());
        let mut fresh = Vec::new();
        for item in listing {
            match item {
                Ok(stamp) => {
                    present.insert(stamp.path.clone());
                    if !self.target.accepts(&stamp.path) {
                        continue;
                    }
                    if let Some(event) = self.seen.observe(&stamp.path, stamp.modified) {
                        fresh.push(event);
                    }
                }
                Err(e) => {
                    debug!("{e}; retrying next poll");
                    present.insert(e.path);
                }
            }
        }
        self.seen.retain_present(&present);

        fresh.sort_by(|a, b| (a.timestamp, &a.path).cmp(&(b.timestamp, &b.path)));
        let count = fresh.len();
        if count > 0 {
            trace!(count, "poll found new files");
        }
        self.queue.extend(fresh);
        Ok(count)
    }
}

impl<L: DirectoryLister> FileEventSource for PollingEventSource<L> {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<FileEvent>, EventSourceError> {
        if let Some(event) = self.queue.pop_front() {
            return Ok(Some(event));
        }

        let deadline = Instant::now() + timeout;
        loop {
            let now = Instant::now();
            if now >= self.next_poll {
                self.next_poll = now + self.interval;
                self.poll_once()?;
                if let Some(event) = self.queue.pop_front() {
                    return Ok(Some(event));
                }
            }
            if now >= deadline {
                return Ok(None);
            }
            thread::sleep(self.next_poll.min(deadline).saturating_duration_since(now));
        }
    }

    fn stop(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FileEventKind;
    use crate::domain::ports::{FileStamp, Listing};
    use crate::domain::value_objects::ExtensionFilter;
    use crate::error::TransientReadError;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use std::time::SystemTime;
    use tempfile::tempdir;

    #[derive(Clone)]
    enum Entry {
        File(&'static str, u64),
        Locked(&'static str),
    }

    /// In-memory lister whose contents tests mutate between polls
    #[derive(Clone, Default)]
    struct FakeLister {
        entries: Arc<Mutex<Vec<Entry>>>,
    }

    impl FakeLister {
        fn set(&self, entries: Vec<Entry>) {
            *self.entries.lock().unwrap() = entries;
        }
    }

    impl DirectoryLister for FakeLister {
        fn list(&self, dir: &Path) -> Result<Listing, DirectoryError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .map(|e| match e {
                    Entry::File(name, secs) => Ok(FileStamp::new(
                        dir.join(name),
                        SystemTime::UNIX_EPOCH + Duration::from_secs(*secs),
                    )),
                    Entry::Locked(name) => Err(TransientReadError {
                        path: dir.join(name),
                        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                    }),
                })
                .collect())
        }
    }

    fn make_source(
        lister: &FakeLister,
        filter: ExtensionFilter,
    ) -> (tempfile::TempDir, PollingEventSource<FakeLister>) {
        let dir = tempdir().unwrap();
        let target = WatchTarget::new(dir.path(), filter).unwrap();
        let source = PollingEventSource::new(target, lister.clone(), Duration::ZERO).unwrap();
        (dir, source)
    }

    fn drain(source: &mut PollingEventSource<FakeLister>) -> Vec<FileEvent> {
        let mut out = Vec::new();
        while let Some(event) = source.next_event(Duration::ZERO).unwrap() {
            out.push(event);
        }
        out
    }

    #[test]
    fn baseline_files_are_not_emitted() {
        let lister = FakeLister::default();
        lister.set(vec![Entry::File("old.log", 1)]);
        let (_dir, mut source) = make_source(&lister, ExtensionFilter::default());
        assert!(drain(&mut source).is_empty());
    }

    #[test]
    fn emits_new_files_in_modification_order() {
        let lister = FakeLister::default();
        let (dir, mut source) = make_source(&lister, ExtensionFilter::default());

        lister.set(vec![Entry::File("b.log", 20), Entry::File("a.log", 10)]);
        let events = drain(&mut source);

        let names: Vec<_> = events.iter().map(|e| e.path.clone()).collect();
        assert_eq!(names, vec![dir.path().join("a.log"), dir.path().join("b.log")]);
        assert!(events.iter().all(|e| e.kind == FileEventKind::Created));
    }

    #[test]
    fn untouched_files_are_not_reemitted() {
        let lister = FakeLister::default();
        let (_dir, mut source) = make_source(&lister, ExtensionFilter::default());

        lister.set(vec![Entry::File("a.log", 10)]);
        assert_eq!(drain(&mut source).len(), 1);
        assert_eq!(source.poll_once().unwrap(), 0);
        assert_eq!(source.poll_once().unwrap(), 0);

        lister.set(vec![Entry::File("a.log", 11)]);
        let events = drain(&mut source);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, FileEventKind::Modified);
    }

    #[test]
    fn transient_errors_are_retried_next_cycle() {
        let lister = FakeLister::default();
        let (dir, mut source) = make_source(&lister, ExtensionFilter::default());

        lister.set(vec![Entry::Locked("a.log"), Entry::File("b.log", 5)]);
        let events = drain(&mut source);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].path, dir.path().join("b.log"));

        lister.set(vec![Entry::File("a.log", 6), Entry::File("b.log", 5)]);
        let events = drain(&mut source);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].path, dir.path().join("a.log"));
    }

    #[test]
    fn extension_filter_applies() {
        let lister = FakeLister::default();
        let (_dir, mut source) = make_source(&lister, ExtensionFilter::new(["log"]));

        lister.set(vec![Entry::File("a.log", 1), Entry::File("notes.txt", 1)]);
        let events = drain(&mut source);
        assert_eq!(events.len(), 1);
        assert!(events[0].path.ends_with("a.log"));
    }

    #[test]
    fn returns_none_when_nothing_arrives() {
        let lister = FakeLister::default();
        let (_dir, mut source) = make_source(&lister, ExtensionFilter::default());
        assert!(source.next_event(Duration::from_millis(5)).unwrap().is_none());
    }

    #[test]
    fn works_against_the_real_disk() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("old.log"), "x").unwrap();
        let target = WatchTarget::new(dir.path(), ExtensionFilter::default()).unwrap();
        let mut source = PollingEventSource::new(
            target,
            crate::infrastructure::fs::LocalDirectoryLister::new(),
            Duration::ZERO,
        )
        .unwrap();

        std::fs::write(dir.path().join("new.log"), "y").unwrap();
        let event = source
            .next_event(Duration::from_millis(50))
            .unwrap()
            .expect("new file should be detected");
        assert_eq!(event.path, dir.path().join("new.log"));
        assert!(source.next_event(Duration::ZERO).unwrap().is_none());
    }
}
