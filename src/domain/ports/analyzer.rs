//! Analyzer port - the "submit batch for analysis" capability

use std::path::PathBuf;

use crate::domain::entities::Report;
use crate::error::AnalysisError;

/// Turns an ordered list of artifact paths into one report.
///
/// Implementations read file contents themselves. Called from a worker
/// thread, hence `Send + Sync`.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, files: &[PathBuf], context: Option<&str>) -> Result<Report, AnalysisError>;
}
