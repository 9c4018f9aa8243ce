//! Report storage
//!
//! Reports land in a single output directory. Names are sanitized first, so
//! a user-supplied name can never point outside it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::domain::value_objects::{sanitize_filename, timestamped_name};

#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `content` to `{dir}/{sanitized name}`, replacing any previous file.
    pub fn save(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.join(sanitize_filename(name));
        self.write_atomic(&path, content)?;
        Ok(path)
    }

    /// Write under a per-batch name (`{stem}_{unix_seconds}.txt`), adding a
    /// numeric suffix if that name is taken.
    pub fn save_unique(
        &self,
        name: &str,
        content: &str,
        unix_seconds: i64,
    ) -> std::io::Result<PathBuf> {
        let base = timestamped_name(&sanitize_filename(name), unix_seconds);
        let mut path = self.dir.join(&base);
        let stem = base.trim_end_matches(".txt");
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("{stem}_{n}.txt"));
            n += 1;
        }
        self.write_atomic(&path, content)?;
        Ok(path)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        info!(path = %path.display(), "report saved");
        Ok(())
    }
}
