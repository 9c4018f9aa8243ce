//! Domain Services
//!
//! Stateless or self-contained logic with no I/O.

mod batch_accumulator;
mod prompt;

pub use batch_accumulator::BatchAccumulator;
pub use prompt::{Prompt, PromptBuilder};
