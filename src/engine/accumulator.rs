//! Chunked histogram accumulation.

use std::num::NonZeroUsize;

use tokio_util::sync::CancellationToken;

use super::scheduler::YieldPoint;
use super::sink::ResultSink;
use crate::digits::first_digit;
use crate::error::DigitLensError;
use crate::histogram::{DigitHistogram, Progress};
use crate::token::NumericToken;

/// Default number of tokens folded per scheduling turn.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// One run's accumulation state: a cursor over the input and the
/// histogram built so far. Each run gets a fresh accumulator; they are
/// never shared.
#[derive(Debug, Default)]
pub struct Accumulator {
    histogram: DigitHistogram,
    cursor: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The histogram built so far.
    pub fn histogram(&self) -> &DigitHistogram {
        &self.histogram
    }

    /// Folds the whole token sequence into the histogram in batches of
    /// `batch_size`, in source order.
    ///
    /// After each batch the sink receives a snapshot with the progress
    /// percentage, the cancellation token is checked, and control is
    /// released through the yield point. The final histogram is
    /// independent of the batch size; batching only sets the cadence of
    /// progress events. Completion is signalled through `on_complete`
    /// exactly once, with no progress events after it.
    ///
    /// Cancellation takes effect at the next batch boundary and leaves
    /// the partial state in place.
    pub async fn process_all<S, Y>(
        &mut self,
        tokens: &[NumericToken],
        batch_size: NonZeroUsize,
        sink: &mut S,
        yield_point: &Y,
        cancel_token: &CancellationToken,
    ) -> Result<&DigitHistogram, DigitLensError>
    where
        S: ResultSink,
        Y: YieldPoint,
    {
        let total = tokens.len();

        if total == 0 {
            // Nothing to fold: report completion in a single step.
            sink.on_progress(&self.histogram, Progress::from_counts(0, 0));
            sink.on_complete(&self.histogram);
            return Ok(&self.histogram);
        }

        while self.cursor < total {
            if cancel_token.is_cancelled() {
                log::debug!("run cancelled at token {}/{}", self.cursor, total);
                return Err(DigitLensError::Cancelled);
            }

            let end = (self.cursor + batch_size.get()).min(total);
            for token in &tokens[self.cursor..end] {
                self.histogram.record(first_digit(token));
            }
            self.cursor = end;

            sink.on_progress(&self.histogram, Progress::from_counts(self.cursor, total));

            if self.cursor < total {
                yield_point.pause().await;
            }
        }

        sink.on_complete(&self.histogram);
        Ok(&self.histogram)
    }
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod accumulator_tests;
