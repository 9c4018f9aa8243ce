//! DirectoryLister port - enumerate files with their modification times

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{DirectoryError, TransientReadError};

/// A regular file and its last modification time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileStamp {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl FileStamp {
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified,
        }
    }
}

/// One listing: readable files, plus per-file failures to retry later
pub type Listing = Vec<Result<FileStamp, TransientReadError>>;

/// Lists the regular files directly inside a directory.
///
/// Implementations:
/// - `LocalDirectoryLister` - `std::fs::read_dir` on the local disk
/// - test doubles holding an in-memory listing
pub trait DirectoryLister {
    /// Fails with `DirectoryError` when `dir` is missing or not a directory.
    /// Subdirectories are not reported.
    fn list(&self, dir: &Path) -> Result<Listing, DirectoryError>;
}
