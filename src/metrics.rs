// Metrics hooks for analysis calls.
//
// Callers install a global `AnalysisMetrics` implementation via
// [`set_analysis_metrics`]; every `Analyzer` then reports ranking and
// end-to-end latency. Nothing is recorded while no recorder is installed.
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use once_cell::sync::OnceCell;

/// Metrics observer for analysis calls.
pub trait AnalysisMetrics: Send + Sync {
    /// Record one corpus ranking pass over `corpus_len` passages.
    fn record_rank(&self, latency: Duration, corpus_len: usize);

    /// Record a finished analysis. `plagiarism_score` is the reported
    /// percentage and `matched_sources` the number of listed sources.
    fn record_analysis(&self, latency: Duration, plagiarism_score: u8, matched_sources: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn AnalysisMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn AnalysisMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn AnalysisMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global analysis metrics recorder.
pub fn set_analysis_metrics(recorder: Option<Arc<dyn AnalysisMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn AnalysisMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_rank(self, corpus_len: usize) {
        self.recorder.record_rank(self.start.elapsed(), corpus_len);
    }

    pub(crate) fn record_analysis(self, plagiarism_score: u8, matched_sources: usize) {
        self.recorder
            .record_analysis(self.start.elapsed(), plagiarism_score, matched_sources);
    }
}
