//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod provider;
mod report_name;
mod threshold;
mod watch_target;

pub use provider::Provider;
pub use report_name::{sanitize_filename, timestamped_name, DEFAULT_REPORT_NAME};
pub use threshold::Threshold;
pub use watch_target::{ExtensionFilter, WatchTarget};
