//! Batch accumulator
//!
//! Turns the `FileEvent` stream into threshold-sized batches. There is no
//! time-based flush: a batch below the threshold waits indefinitely.

use std::path::PathBuf;

use crate::domain::entities::{FileEvent, PendingBatch};
use crate::domain::value_objects::Threshold;

#[derive(Debug)]
pub struct BatchAccumulator {
    threshold: Threshold,
    pending: PendingBatch,
}

impl BatchAccumulator {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            pending: PendingBatch::new(),
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Add the event's path to the current batch. Returns whether the batch
    /// is now ready.
    pub fn observe(&mut self, event: FileEvent) -> bool {
        self.pending.insert(event.path, event.timestamp);
        self.is_ready()
    }

    pub fn is_ready(&self) -> bool {
        self.threshold.is_reached(self.pending.len())
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &PendingBatch {
        &self.pending
    }

    /// Take the batch in first-observed order and start a new empty one.
    /// An empty batch yields an empty Vec.
    pub fn drain_and_reset(&mut self) -> Vec<PathBuf> {
        self.pending.take()
    }
}
