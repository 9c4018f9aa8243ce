//! Report entity

use std::path::PathBuf;

use crate::domain::value_objects::Provider;

/// Plain-text security report for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Report body as returned by the provider
    pub text: String,
    /// Artifacts covered, in batch order
    pub files: Vec<PathBuf>,
    pub provider: Provider,
    /// Where the report was written, when an output name was configured
    pub saved_to: Option<PathBuf>,
}

impl Report {
    pub fn new(text: impl Into<String>, files: Vec<PathBuf>, provider: Provider) -> Self {
        Self {
            text: text.into(),
            files,
            provider,
            saved_to: None,
        }
    }

    pub fn with_saved_to(mut self, path: PathBuf) -> Self {
        self.saved_to = Some(path);
        self
    }
}
