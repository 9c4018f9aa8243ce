//! Emission bookkeeping shared by the event sources

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::entities::{FileEvent, FileEventKind};

/// Last emitted (or baseline) modification time per path
#[derive(Debug, Default)]
pub(crate) struct SeenFiles {
    stamps: HashMap<PathBuf, SystemTime>,
    /// Present at startup but not yet stat-able; absorbed silently later
    unstamped_baseline: HashSet<PathBuf>,
}

impl SeenFiles {
    pub(crate) fn record_baseline(&mut self, path: PathBuf, modified: SystemTime) {
        self.stamps.insert(path, modified);
    }

    pub(crate) fn record_unstamped_baseline(&mut self, path: PathBuf) {
        self.unstamped_baseline.insert(path);
    }

    /// Decide whether `(path, modified)` is news. Records it when it is.
    pub(crate) fn observe(&mut self, path: &Path, modified: SystemTime) -> Option<FileEvent> {
        if self.unstamped_baseline.remove(path) && !self.stamps.contains_key(path) {
            self.stamps.insert(path.to_path_buf(), modified);
            return None;
        }
        let kind = match self.stamps.get(path) {
            None => FileEventKind::Created,
            Some(previous) if *previous == modified => return None,
            Some(_) => FileEventKind::Modified,
        };
        self.stamps.insert(path.to_path_buf(), modified);
        Some(FileEvent::new(path, modified, kind))
    }

    /// Forget paths that no longer exist so a re-created file counts as new
    pub(crate) fn retain_present(&mut self, present: &HashSet<PathBuf>) {
        self.stamps.retain(|p, _| present.contains(p));
        self.unstamped_baseline.retain(|p| present.contains(p));
    }

    pub(crate) fn forget(&mut self, path: &Path) {
        self.stamps.remove(path);
        self.unstamped_baseline.remove(path);
    }
}
