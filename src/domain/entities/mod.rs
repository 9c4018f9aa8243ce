//! Domain Entities
//!
//! - `FileEvent` - One observed change in the watch target
//! - `PendingBatch` - Ordered, de-duplicated paths awaiting analysis
//! - `Report` - Result of analyzing one batch

mod file_event;
mod pending_batch;
mod report;

pub use file_event::{FileEvent, FileEventKind};
pub use pending_batch::PendingBatch;
pub use report::Report;
