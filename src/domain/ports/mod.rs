//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod analyzer;
pub mod directory_lister;
pub mod event_source;
pub mod llm_client;

pub use analyzer::Analyzer;
pub use directory_lister::{DirectoryLister, FileStamp, Listing};
pub use event_source::{EventSourceError, FileEventSource};
pub use llm_client::LlmClient;
