//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Directory listing, artifact reading, report storage
//! - `events/` - File event sources (polling, native notifications)
//! - `providers/` - LLM clients (Google, OpenAI, Anthropic)

pub mod events;
pub mod fs;
pub mod providers;

// Re-export for convenience
pub use events::{NotifyEventSource, PollingEventSource};
pub use fs::{ArtifactReader, LocalDirectoryLister, ReportStore};
pub use providers::{client_for_key, ProviderSettings};
