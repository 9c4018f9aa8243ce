//! Logwarden - security log analyst
//!
//! Reads security artifacts (logs, metrics), optionally watches a folder for
//! new ones, and asks a large-language-model provider for a plain-text
//! threat report. Sentinel Mode batches new files and triggers exactly one
//! analysis per batch.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    folder_batch, AnalysisService, AnalysisTrigger, ReportNaming, ReportOutput,
    SentinelController, SentinelEvent, SentinelState, SentinelStats,
};
pub use config::{Config, EnvLayer};
pub use domain::entities::{FileEvent, FileEventKind, Report};
pub use domain::value_objects::{ExtensionFilter, Provider, Threshold, WatchTarget};
pub use error::{WardenError, WardenResult};
