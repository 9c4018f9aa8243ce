//! Analysis use case
//!
//! Implements the `Analyzer` port: read artifacts, build the prompt, call the
//! provider once, optionally persist the report. Nothing is retried.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::entities::Report;
use crate::domain::ports::{Analyzer, DirectoryLister, LlmClient};
use crate::domain::services::PromptBuilder;
use crate::domain::value_objects::ExtensionFilter;
use crate::error::{AnalysisError, DirectoryError};
use crate::infrastructure::fs::{ArtifactReader, ReportStore};

/// How saved reports are named
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportNaming {
    /// Exactly the sanitized output name (one-shot runs)
    Fixed,
    /// `{stem}_{unix_seconds}.txt` per batch (Sentinel Mode)
    Timestamped,
}

/// Where reports go when the user asked for a file
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub store: ReportStore,
    pub name: String,
    pub naming: ReportNaming,
}

pub struct AnalysisService {
    reader: ArtifactReader,
    client: Box<dyn LlmClient>,
    output: Option<ReportOutput>,
}

impl AnalysisService {
    pub fn new(reader: ArtifactReader, client: Box<dyn LlmClient>) -> Self {
        Self {
            reader,
            client,
            output: None,
        }
    }

    pub fn with_output(mut self, output: Option<ReportOutput>) -> Self {
        self.output = output;
        self
    }

    fn persist(&self, report: Report) -> Report {
        let Some(output) = &self.output else {
            return report;
        };
        let saved = match output.naming {
            ReportNaming::Fixed => output.store.save(&output.name, &report.text),
            ReportNaming::Timestamped => output.store.save_unique(
                &output.name,
                &report.text,
                chrono::Utc::now().timestamp(),
            ),
        };
        match saved {
            Ok(path) => report.with_saved_to(path),
            Err(e) => {
                warn!(dir = %output.store.dir().display(), "could not save report: {e}");
                report
            }
        }
    }
}

impl Analyzer for AnalysisService {
    fn analyze(&self, files: &[PathBuf], context: Option<&str>) -> Result<Report, AnalysisError> {
        let (data, included) = self.reader.read_batch(files);
        if included == 0 || data.trim().is_empty() {
            return Err(AnalysisError::NoContent { files: files.len() });
        }

        let prompt = PromptBuilder::new().with_context(context).build(&data);
        let provider = self.client.provider();
        info!(
            %provider,
            files = files.len(),
            included,
            bytes = data.len(),
            "requesting security report"
        );

        let text = self.client.complete(&prompt)?;
        Ok(self.persist(Report::new(text, files.to_vec(), provider)))
    }
}

/// Every accepted regular file directly in `dir`, sorted by path.
/// Unreadable entries are skipped.
pub fn folder_batch(
    lister: &impl DirectoryLister,
    dir: &Path,
    filter: &ExtensionFilter,
) -> Result<Vec<PathBuf>, DirectoryError> {
    let mut files: Vec<PathBuf> = lister
        .list(dir)?
        .into_iter()
        .filter_map(|item| match item {
            Ok(stamp) => Some(stamp.path),
            Err(e) => {
                warn!("skipping: {e}");
                None
            }
        })
        .filter(|p| filter.accepts(p))
        .collect();
    files.sort();
    Ok(files)
}
