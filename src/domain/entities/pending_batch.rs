//! Pending batch entity
//!
//! Paths keep their first-observed position. A repeated path replaces the
//! stored timestamp when the new one is more recent but never adds an entry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Ordered set of paths collected since the last dispatch
#[derive(Debug, Default)]
pub struct PendingBatch {
    entries: Vec<(PathBuf, SystemTime)>,
    index: HashMap<PathBuf, usize>,
}

impl PendingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or coalesce. Returns `true` when the path was not yet present.
    pub fn insert(&mut self, path: PathBuf, timestamp: SystemTime) -> bool {
        if let Some(&pos) = self.index.get(&path) {
            let slot = &mut self.entries[pos].1;
            if timestamp > *slot {
                *slot = timestamp;
            }
            return false;
        }
        self.index.insert(path.clone(), self.entries.len());
        self.entries.push((path, timestamp));
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    /// Timestamp kept for `path`, if pending
    pub fn timestamp_of(&self, path: &Path) -> Option<SystemTime> {
        self.index.get(path).map(|&pos| self.entries[pos].1)
    }

    /// Paths in first-observed order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(p, _)| p.as_path())
    }

    /// Take every path in order, leaving the batch empty
    pub fn take(&mut self) -> Vec<PathBuf> {
        self.index.clear();
        std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(p, _)| p)
            .collect()
    }
}
