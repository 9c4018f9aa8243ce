//! Domain Layer
//!
//! Core types and batching logic for Logwarden. Apart from the startup
//! check in `WatchTarget::new`, all I/O goes through `ports/`.
//!
//! ## Structure
//!
//! - `entities/` - FileEvent, PendingBatch, Report
//! - `value_objects/` - Threshold, WatchTarget, Provider, report names
//! - `services/` - BatchAccumulator, PromptBuilder
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
