//! Sentinel controller
//!
//! Owns the event source, the pending batch and the trigger. All mutation
//! happens on the thread that calls `run`, so the "ready?" check and the
//! drain can never interleave with another writer.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::entities::{FileEvent, PendingBatch};
use crate::domain::ports::{EventSourceError, FileEventSource};
use crate::domain::services::BatchAccumulator;
use crate::domain::value_objects::Threshold;
use crate::error::TriggerError;

use super::event::{display_path, display_paths, SentinelEvent};
use super::trigger::{AnalysisTrigger, TriggerHandle};

/// How long one loop iteration waits for the next file event
pub const DEFAULT_WAIT: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelState {
    /// Nothing pending, nothing in flight
    Idle,
    /// Pending batch below threshold
    Accumulating,
    /// An analysis is in flight
    Triggering,
    /// Cancelled (terminal)
    Stopped,
}

/// Counters returned when the loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentinelStats {
    pub detected: usize,
    pub triggered: u64,
    pub reports: u64,
    pub failures: u64,
    pub discarded: usize,
}

pub struct SentinelController<S> {
    directory: PathBuf,
    source: S,
    accumulator: BatchAccumulator,
    trigger: AnalysisTrigger,
    in_flight: Option<TriggerHandle>,
    state: SentinelState,
    stats: SentinelStats,
    wait: Duration,
}

impl<S: FileEventSource> SentinelController<S> {
    pub fn new(
        directory: impl Into<PathBuf>,
        source: S,
        threshold: Threshold,
        trigger: AnalysisTrigger,
    ) -> Self {
        Self {
            directory: directory.into(),
            source,
            accumulator: BatchAccumulator::new(threshold),
            trigger,
            in_flight: None,
            state: SentinelState::Idle,
            stats: SentinelStats::default(),
            wait: DEFAULT_WAIT,
        }
    }

    /// Upper bound on how long a stop request can go unnoticed
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn state(&self) -> SentinelState {
        self.state
    }

    pub fn stats(&self) -> SentinelStats {
        self.stats
    }

    pub fn pending(&self) -> &PendingBatch {
        self.accumulator.pending()
    }

    /// Run until `running` is cleared, then stop.
    ///
    /// Source and analysis errors are reported through `emit` and never end
    /// the loop.
    pub fn run(&mut self, running: &AtomicBool, emit: &dyn Fn(SentinelEvent)) -> SentinelStats {
        info!(
            directory = %self.directory.display(),
            threshold = %self.accumulator.threshold(),
            "sentinel started"
        );
        emit(SentinelEvent::WatchStarted {
            directory: display_path(&self.directory),
            threshold: self.accumulator.threshold().get(),
        });

        while running.load(Ordering::SeqCst) && self.state != SentinelState::Stopped {
            self.poll_trigger(emit);
            if self.in_flight.is_none() && self.accumulator.is_ready() {
                self.dispatch(emit);
            }

            match self.source.next_event(self.wait) {
                Ok(Some(event)) => self.observe(event, emit),
                Ok(None) => {}
                Err(e) => self.report_source_error(e, emit),
            }
        }

        self.stop(emit);
        self.stats
    }

    /// Feed one event into the pending batch. Dispatches when the batch is
    /// ready and nothing is in flight.
    pub fn observe(&mut self, event: FileEvent, emit: &dyn Fn(SentinelEvent)) {
        if self.state == SentinelState::Stopped {
            return;
        }

        let before = self.accumulator.len();
        let path = event.path.clone();
        let kind = event.kind;
        let ready = self.accumulator.observe(event);

        if self.accumulator.len() == before {
            debug!(path = %path.display(), "coalesced duplicate event");
        } else {
            self.stats.detected += 1;
            debug!(path = %path.display(), %kind, pending = self.accumulator.len(), "file detected");
            emit(SentinelEvent::FileDetected {
                path: display_path(&path),
                kind,
                pending: self.accumulator.len(),
            });
        }

        if self.in_flight.is_some() {
            return;
        }
        if ready {
            self.dispatch(emit);
        } else {
            self.state = SentinelState::Accumulating;
        }
    }

    /// Complete the in-flight analysis if its worker is done.
    /// Returns true when an outcome was reported.
    pub fn poll_trigger(&mut self, emit: &dyn Fn(SentinelEvent)) -> bool {
        match &self.in_flight {
            Some(handle) if handle.is_finished() => {}
            _ => return false,
        }
        if let Some(handle) = self.in_flight.take() {
            self.complete(handle, emit);
        }
        true
    }

    /// Block until the in-flight analysis (if any) is done.
    pub fn wait_for_trigger(&mut self, emit: &dyn Fn(SentinelEvent)) -> bool {
        match self.in_flight.take() {
            Some(handle) => {
                self.complete(handle, emit);
                true
            }
            None => false,
        }
    }

    /// Cancel: stop the source, discard the pending batch, let an in-flight
    /// analysis finish without starting another one.
    pub fn stop(&mut self, emit: &dyn Fn(SentinelEvent)) {
        if self.state == SentinelState::Stopped {
            return;
        }
        self.state = SentinelState::Stopped;
        self.source.stop();

        let discarded = self.accumulator.drain_and_reset().len();
        if discarded > 0 {
            info!(discarded, "discarding pending batch");
        }
        self.stats.discarded += discarded;

        self.wait_for_trigger(emit);

        info!(
            triggered = self.stats.triggered,
            reports = self.stats.reports,
            failures = self.stats.failures,
            "sentinel stopped"
        );
        emit(SentinelEvent::Shutdown { discarded });
    }

    /// Hand the pending batch to the trigger. The batch is only drained once
    /// the trigger accepts it, so a busy trigger leaves it untouched.
    fn dispatch(&mut self, emit: &dyn Fn(SentinelEvent)) {
        let files: Vec<PathBuf> = self
            .accumulator
            .pending()
            .paths()
            .map(Path::to_path_buf)
            .collect();
        match self.trigger.fire(files) {
            Ok(handle) => {
                self.accumulator.drain_and_reset();
                self.stats.triggered += 1;
                emit(SentinelEvent::AnalysisStarted {
                    batch: handle.batch(),
                    files: display_paths(handle.files()),
                });
                self.in_flight = Some(handle);
                self.state = SentinelState::Triggering;
            }
            Err(TriggerError::EmptyBatch) => {
                self.state = SentinelState::Idle;
            }
            Err(TriggerError::Busy) => {
                debug!(pending = self.accumulator.len(), "trigger busy, batch kept");
                self.state = SentinelState::Triggering;
            }
            Err(e @ TriggerError::Spawn(_)) => {
                let files = self.accumulator.drain_and_reset();
                warn!("analysis not started: {e}");
                self.stats.failures += 1;
                emit(SentinelEvent::AnalysisFailed {
                    batch: self.trigger.fired() + 1,
                    files: display_paths(&files),
                    message: e.to_string(),
                });
                self.settle();
            }
        }
    }

    fn complete(&mut self, handle: TriggerHandle, emit: &dyn Fn(SentinelEvent)) {
        let outcome = handle.join();
        match outcome.result {
            Ok(report) => {
                self.stats.reports += 1;
                info!(batch = outcome.batch, files = outcome.files.len(), "report ready");
                emit(SentinelEvent::ReportReady {
                    batch: outcome.batch,
                    files: display_paths(&outcome.files),
                    provider: report.provider.to_string(),
                    saved_to: report.saved_to.as_deref().map(display_path),
                    report: report.text,
                });
            }
            Err(e) => {
                self.stats.failures += 1;
                warn!(batch = outcome.batch, "analysis failed: {e}");
                emit(SentinelEvent::AnalysisFailed {
                    batch: outcome.batch,
                    files: display_paths(&outcome.files),
                    message: e.to_string(),
                });
            }
        }

        if self.state == SentinelState::Stopped {
            return;
        }
        if self.accumulator.is_ready() {
            self.dispatch(emit);
        } else {
            self.settle();
        }
    }

    fn settle(&mut self) {
        self.state = if self.accumulator.is_empty() {
            SentinelState::Idle
        } else {
            SentinelState::Accumulating
        };
    }

    fn report_source_error(&self, error: EventSourceError, emit: &dyn Fn(SentinelEvent)) {
        warn!("event source: {error}");
        emit(SentinelEvent::SourceError {
            message: error.to_string(),
        });
    }
}
