//! Property tests for batch accumulation and triggering.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use logwarden::domain::entities::{FileEvent, Report};
use logwarden::domain::ports::{Analyzer, EventSourceError, FileEventSource};
use logwarden::domain::services::BatchAccumulator;
use logwarden::error::AnalysisError;
use logwarden::{AnalysisTrigger, Provider, SentinelController, SentinelEvent, Threshold};

#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<Vec<PathBuf>>>>,
}

impl Analyzer for Recorder {
    fn analyze(&self, files: &[PathBuf], _context: Option<&str>) -> Result<Report, AnalysisError> {
        self.calls.lock().unwrap().push(files.to_vec());
        Ok(Report::new("ok", files.to_vec(), Provider::Google))
    }
}

struct NullSource;

impl FileEventSource for NullSource {
    fn next_event(&mut self, _timeout: Duration) -> Result<Option<FileEvent>, EventSourceError> {
        Ok(None)
    }
}

fn path(i: usize) -> PathBuf {
    PathBuf::from(format!("logs/{i:03}.log"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N distinct files at threshold T fire N / T analyses of
    /// exactly T files each, in arrival order, leaving N % T pending.
    #[test]
    fn property_distinct_files_fill_exact_batches(
        files in 0usize..40,
        threshold in 1usize..8,
    ) {
        let recorder = Recorder::default();
        let trigger = AnalysisTrigger::new(Arc::new(recorder.clone()), None);
        let mut controller = SentinelController::new(
            PathBuf::from("logs"),
            NullSource,
            Threshold::try_from(threshold).unwrap(),
            trigger,
        );
        let events = RefCell::new(Vec::new());
        let emit = |e: SentinelEvent| events.borrow_mut().push(e);

        for i in 0..files {
            controller.observe(FileEvent::created(path(i), SystemTime::now()), &emit);
            controller.wait_for_trigger(&emit);
        }

        let calls = recorder.calls.lock().unwrap().clone();
        prop_assert_eq!(calls.len(), files / threshold);
        prop_assert!(calls.iter().all(|batch| batch.len() == threshold));
        prop_assert_eq!(controller.pending().len(), files % threshold);

        let analyzed: Vec<PathBuf> = calls.into_iter().flatten().collect();
        let expected: Vec<PathBuf> = (0..files - files % threshold).map(path).collect();
        prop_assert_eq!(analyzed, expected);

        let stats = controller.stats();
        prop_assert_eq!(stats.detected, files);
        prop_assert_eq!(stats.reports, (files / threshold) as u64);
    }

    /// PROPERTY: Repeated events never grow the batch past the number of
    /// distinct paths, and the batch keeps first-seen order.
    #[test]
    fn property_duplicates_keep_first_seen_order(
        picks in proptest::collection::vec(0usize..10, 0..60),
    ) {
        let mut acc = BatchAccumulator::new(Threshold::try_from(1000).unwrap());
        let mut first_seen: Vec<usize> = Vec::new();

        for &i in &picks {
            acc.observe(FileEvent::modified(path(i), SystemTime::now()));
            if !first_seen.contains(&i) {
                first_seen.push(i);
            }
            prop_assert_eq!(acc.len(), first_seen.len());
        }

        let drained = acc.drain_and_reset();
        let expected: Vec<PathBuf> = first_seen.into_iter().map(path).collect();
        prop_assert_eq!(drained, expected);
        prop_assert!(acc.is_empty());
    }
}
