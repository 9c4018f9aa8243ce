//! Analysis trigger
//!
//! One trigger call = one analyzer call on a worker thread. The lock is an
//! `AtomicBool` taken with compare-exchange and released by a guard owned by
//! the worker, so it is freed however the worker exits.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::info;

use crate::domain::entities::Report;
use crate::domain::ports::Analyzer;
use crate::error::{AnalysisError, TriggerError};

pub struct AnalysisTrigger {
    analyzer: Arc<dyn Analyzer>,
    context: Option<String>,
    lock: Arc<AtomicBool>,
    fired: u64,
}

impl AnalysisTrigger {
    pub fn new(analyzer: Arc<dyn Analyzer>, context: Option<String>) -> Self {
        Self {
            analyzer,
            context,
            lock: Arc::new(AtomicBool::new(false)),
            fired: 0,
        }
    }

    /// True while a worker holds the lock
    pub fn is_busy(&self) -> bool {
        self.lock.load(Ordering::Acquire)
    }

    /// Number of batches handed to the analyzer so far
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Start analysis of `files` on a worker thread.
    ///
    /// Fails with `EmptyBatch` for an empty list and `Busy` while another
    /// worker is running. Neither case touches the analyzer.
    pub fn fire(&mut self, files: Vec<PathBuf>) -> Result<TriggerHandle, TriggerError> {
        if files.is_empty() {
            return Err(TriggerError::EmptyBatch);
        }
        if self
            .lock
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(TriggerError::Busy);
        }

        let batch = self.fired + 1;
        let guard = LockGuard(Arc::clone(&self.lock));
        let analyzer = Arc::clone(&self.analyzer);
        let context = self.context.clone();
        let worker_files = files.clone();

        let worker = thread::Builder::new()
            .name(format!("analysis-{batch}"))
            .spawn(move || {
                let _guard = guard;
                analyzer.analyze(&worker_files, context.as_deref())
            })
            .map_err(|e| {
                // The closure (and the guard with it) is dropped on failure.
                TriggerError::Spawn(e.to_string())
            })?;

        self.fired = batch;
        info!(batch, files = files.len(), "analysis triggered");
        Ok(TriggerHandle {
            batch,
            files,
            worker,
        })
    }
}

struct LockGuard(Arc<AtomicBool>);

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A running analysis
pub struct TriggerHandle {
    batch: u64,
    files: Vec<PathBuf>,
    worker: JoinHandle<Result<Report, AnalysisError>>,
}

impl TriggerHandle {
    pub fn batch(&self) -> u64 {
        self.batch
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the worker is done
    pub fn join(self) -> TriggerOutcome {
        let result = self
            .worker
            .join()
            .unwrap_or(Err(AnalysisError::WorkerPanicked));
        TriggerOutcome {
            batch: self.batch,
            files: self.files,
            result,
        }
    }
}

/// Result of one trigger
#[derive(Debug)]
pub struct TriggerOutcome {
    pub batch: u64,
    pub files: Vec<PathBuf>,
    pub result: Result<Report, AnalysisError>,
}
