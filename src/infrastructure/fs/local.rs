//! Local Directory Lister
//!
//! Implements the DirectoryLister port with `std::fs::read_dir`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::ports::{DirectoryLister, FileStamp, Listing};
use crate::error::{DirectoryError, TransientReadError};

/// Lists regular files on the local disk, following symlinks
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectoryLister;

impl LocalDirectoryLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalDirectoryLister {
    fn list(&self, dir: &Path) -> Result<Listing, DirectoryError> {
        match fs::metadata(dir) {
            Ok(m) if m.is_dir() => {}
            Ok(_) => {
                return Err(DirectoryError::NotADirectory {
                    path: dir.to_path_buf(),
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DirectoryError::NotFound {
                    path: dir.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(DirectoryError::Unreadable {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        }

        let entries = fs::read_dir(dir).map_err(|source| DirectoryError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut listing = Listing::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    listing.push(Err(TransientReadError {
                        path: dir.to_path_buf(),
                        source,
                    }));
                    continue;
                }
            };

            let path = entry.path();
            let metadata = match fs::metadata(&path) {
                Ok(m) => m,
                Err(source) => {
                    listing.push(Err(TransientReadError { path, source }));
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }
            match metadata.modified() {
                Ok(modified) => listing.push(Ok(FileStamp::new(path, modified))),
                Err(source) => listing.push(Err(TransientReadError { path, source })),
            }
        }
        Ok(listing)
    }
}
