//! Reporting interface between the engine and its host.

use crate::analyzer::AnalysisResult;
use crate::histogram::{DigitHistogram, Progress};

/// Receives everything a run emits: per-batch snapshots, the completed
/// histogram, and the terminal classification. All presentation belongs
/// to the implementor; the engine itself produces no prose.
pub trait ResultSink {
    /// Called after every batch with the histogram built so far.
    fn on_progress(&mut self, histogram: &DigitHistogram, progress: Progress);

    /// Called exactly once when the whole sequence has been folded.
    /// No progress events follow it.
    fn on_complete(&mut self, histogram: &DigitHistogram);

    /// Called once with the terminal result of a run that was neither
    /// cancelled nor faulted.
    fn on_result(&mut self, result: &AnalysisResult);
}

/// Discards every event, for callers that only want the return value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ResultSink for NoopSink {
    fn on_progress(&mut self, _histogram: &DigitHistogram, _progress: Progress) {}

    fn on_complete(&mut self, _histogram: &DigitHistogram) {}

    fn on_result(&mut self, _result: &AnalysisResult) {}
}
