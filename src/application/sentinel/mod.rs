//! Sentinel Mode
//!
//! Turns a stream of file events into threshold-sized batches and fires one
//! analysis per batch, never two at once.
//!
//! - `AnalysisTrigger` - Guards the analyzer with a single in-flight lock
//! - `SentinelController` - Event loop and state machine
//! - `SentinelEvent` - Progress notifications (NDJSON-ready)

mod controller;
mod event;
mod trigger;


pub use controller::{SentinelController, SentinelState, SentinelStats, DEFAULT_WAIT};
pub use event::SentinelEvent;
pub use trigger::{AnalysisTrigger, TriggerHandle, TriggerOutcome};
