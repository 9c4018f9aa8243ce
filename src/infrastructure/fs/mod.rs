//! File System Implementations

mod artifact;
mod local;
mod report_store;

pub use artifact::{ArtifactError, ArtifactReader};
pub use local::LocalDirectoryLister;
pub use report_store::ReportStore;
