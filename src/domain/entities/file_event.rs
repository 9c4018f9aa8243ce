//! File event entity

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

/// What happened to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileEventKind {
    Created,
    Modified,
}

impl std::fmt::Display for FileEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileEventKind::Created => write!(f, "created"),
            FileEventKind::Modified => write!(f, "modified"),
        }
    }
}

/// One observed filesystem change.
///
/// `timestamp` is the file's modification time when the source could read it,
/// otherwise the moment the change was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub path: PathBuf,
    pub timestamp: SystemTime,
    pub kind: FileEventKind,
}

impl FileEvent {
    pub fn new(path: impl Into<PathBuf>, timestamp: SystemTime, kind: FileEventKind) -> Self {
        Self {
            path: path.into(),
            timestamp,
            kind,
        }
    }

    pub fn created(path: impl Into<PathBuf>, timestamp: SystemTime) -> Self {
        Self::new(path, timestamp, FileEventKind::Created)
    }

    pub fn modified(path: impl Into<PathBuf>, timestamp: SystemTime) -> Self {
        Self::new(path, timestamp, FileEventKind::Modified)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
