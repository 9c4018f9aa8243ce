//! Artifact reading
//!
//! JSON artifacts are re-serialized with two-space indentation. Text
//! artifacts honour the line limit by keeping only the most recent lines.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads security artifacts for a prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactReader {
    line_limit: usize,
}

impl ArtifactReader {
    /// `line_limit` of 0 keeps whole files
    pub fn new(line_limit: usize) -> Self {
        Self { line_limit }
    }

    pub fn line_limit(&self) -> usize {
        self.line_limit
    }

    /// Read one artifact, without framing
    pub fn read(&self, path: &Path) -> Result<String, ArtifactError> {
        let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if is_json(path) {
            let value: serde_json::Value =
                serde_json::from_str(&raw).map_err(|source| ArtifactError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            return serde_json::to_string_pretty(&value).map_err(|source| ArtifactError::Json {
                path: path.to_path_buf(),
                source,
            });
        }

        Ok(tail_lines(&raw, self.line_limit))
    }

    /// Read and frame every artifact in order. Unreadable files are skipped
    /// with a warning. Returns the framed data and how many files made it in.
    pub fn read_batch(&self, files: &[PathBuf]) -> (String, usize) {
        let mut data = String::new();
        let mut included = 0;
        for path in files {
            match self.read(path) {
                Ok(content) => {
                    debug!(path = %path.display(), bytes = content.len(), "read artifact");
                    data.push_str(&frame(path, &content));
                    included += 1;
                }
                Err(e) => warn!("skipping artifact: {e}"),
            }
        }
        (data, included)
    }
}

/// Header-delimited block the prompt uses to separate artifacts
pub fn frame(path: &Path, content: &str) -> String {
    format!("\n--- FILE: {} ---\n{}\n", path.display(), content)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn tail_lines(content: &str, limit: usize) -> String {
    if limit == 0 {
        return content.to_string();
    }
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    if lines.len() <= limit {
        return content.to_string();
    }
    lines[lines.len() - limit..].concat()
}
