//! Watch target value object
//!
//! A directory observed in Sentinel Mode plus the optional extension filter.
//! Validated once at construction and immutable afterwards.

use std::path::{Path, PathBuf};

use crate::error::DirectoryError;

/// Case-insensitive set of accepted file extensions.
///
/// An empty filter accepts every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter(Vec<String>);

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        normalized.sort();
        normalized.dedup();
        Self(normalized)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extensions(&self) -> &[String] {
        &self.0
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if self.0.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.0.iter().any(|allowed| allowed.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

/// A validated directory to watch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    path: PathBuf,
    filter: ExtensionFilter,
}

impl WatchTarget {
    /// Validate that `path` exists and is a directory.
    pub fn new(path: impl Into<PathBuf>, filter: ExtensionFilter) -> Result<Self, DirectoryError> {
        let path = path.into();
        let metadata = match std::fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DirectoryError::NotFound { path });
            }
            Err(source) => return Err(DirectoryError::Unreadable { path, source }),
        };
        if !metadata.is_dir() {
            return Err(DirectoryError::NotADirectory { path });
        }
        Ok(Self { path, filter })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filter(&self) -> &ExtensionFilter {
        &self.filter
    }

    /// Whether a file directly inside the target qualifies for emission
    pub fn accepts(&self, file: &Path) -> bool {
        self.filter.accepts(file)
    }
}
