//! Sentinel event types

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::FileEventKind;

/// Sentinel events for NDJSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SentinelEvent {
    /// Watch loop started
    WatchStarted { directory: String, threshold: usize },
    /// A new or modified file joined the pending batch
    FileDetected {
        path: String,
        kind: FileEventKind,
        pending: usize,
    },
    /// A batch was handed to the analyzer
    AnalysisStarted { batch: u64, files: Vec<String> },
    /// The analyzer produced a report
    ReportReady {
        batch: u64,
        files: Vec<String>,
        provider: String,
        saved_to: Option<String>,
        report: String,
    },
    /// The analyzer failed; the batch is not retried
    AnalysisFailed {
        batch: u64,
        files: Vec<String>,
        message: String,
    },
    /// The event source reported a recoverable problem
    SourceError { message: String },
    /// Watch loop stopped
    Shutdown { discarded: usize },
}

impl SentinelEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

pub(crate) fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| display_path(p)).collect()
}

pub(crate) fn display_path(path: &Path) -> String {
    path.display().to_string()
}
