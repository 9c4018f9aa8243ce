//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//!
//! ## Use Cases
//!
//! - `AnalysisService` - Reads a batch of artifacts, asks the provider for a
//!   report and stores it (the `Analyzer` capability)
//! - `SentinelController` - Watches a folder and triggers analysis per batch
//! - `folder_batch` - Collects a whole folder for one-shot analysis

pub mod analysis;
pub mod sentinel;

pub use analysis::{folder_batch, AnalysisService, ReportNaming, ReportOutput};
pub use sentinel::{
    AnalysisTrigger, SentinelController, SentinelEvent, SentinelState, SentinelStats,
    TriggerHandle, TriggerOutcome, DEFAULT_WAIT,
};
