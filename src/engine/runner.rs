//! Run orchestration: fold, applicability, classification, reporting.

use std::num::NonZeroUsize;

use tokio_util::sync::CancellationToken;

use super::accumulator::{Accumulator, DEFAULT_BATCH_SIZE};
use super::scheduler::YieldPoint;
use super::sink::ResultSink;
use crate::analyzer::{AnalysisResult, DEFAULT_SIGNIFICANCE_LEVEL, analyze};
use crate::applicability::{is_applicable, parse_values};
use crate::error::DigitLensError;
use crate::histogram::DigitHistogram;
use crate::token::NumericToken;

/// Tunables for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// Tokens folded per scheduling turn.
    pub batch_size: NonZeroUsize,
    /// p-value threshold below which the verdict is anomalous.
    pub significance_level: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            batch_size: DEFAULT_BATCH_SIZE,
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
        }
    }
}

/// Everything a finished run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub histogram: DigitHistogram,
    pub result: AnalysisResult,
}

/// Runs one complete analysis over a token sequence.
///
/// Folds the sequence through a fresh [`Accumulator`], checks
/// applicability over the parsed values, classifies the histogram, and
/// reports the result through the sink before returning it. Each call
/// is an isolated run; nothing carries over between calls.
pub async fn run_analysis<S, Y>(
    tokens: &[NumericToken],
    options: &AnalysisOptions,
    sink: &mut S,
    yield_point: &Y,
    cancel_token: &CancellationToken,
) -> Result<AnalysisOutcome, DigitLensError>
where
    S: ResultSink,
    Y: YieldPoint,
{
    let mut accumulator = Accumulator::new();
    accumulator
        .process_all(tokens, options.batch_size, sink, yield_point, cancel_token)
        .await?;

    let sample_compliant = is_applicable(&parse_values(tokens));
    let result = analyze(
        accumulator.histogram(),
        sample_compliant,
        options.significance_level,
    )?;
    sink.on_result(&result);

    log::debug!(
        "analysis finished: {} tokens, verdict: {}",
        tokens.len(),
        result.verdict
    );

    Ok(AnalysisOutcome {
        histogram: accumulator.histogram().clone(),
        result,
    })
}
