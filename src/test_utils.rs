//! Shared test utilities for digitlens
//!
//! This module provides common sink implementations and sample builders
//! used across multiple test modules.

use crate::analyzer::AnalysisResult;
use crate::engine::ResultSink;
use crate::histogram::{DigitHistogram, Progress};
use crate::token::NumericToken;

/// Everything a sink can observe, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Progress {
        histogram: DigitHistogram,
        progress: Progress,
    },
    Complete {
        histogram: DigitHistogram,
    },
    Result {
        result: AnalysisResult,
    },
}

/// Records every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress percentages in arrival order.
    pub fn progress_values(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Progress { progress, .. } => Some(progress.percent()),
                _ => None,
            })
            .collect()
    }

    pub fn complete_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Complete { .. }))
            .count()
    }
}

impl ResultSink for RecordingSink {
    fn on_progress(&mut self, histogram: &DigitHistogram, progress: Progress) {
        self.events.push(SinkEvent::Progress {
            histogram: histogram.clone(),
            progress,
        });
    }

    fn on_complete(&mut self, histogram: &DigitHistogram) {
        self.events.push(SinkEvent::Complete {
            histogram: histogram.clone(),
        });
    }

    fn on_result(&mut self, result: &AnalysisResult) {
        self.events.push(SinkEvent::Result { result: *result });
    }
}

/// 150 tokens whose leading digits match the rounded Benford shares and
/// whose values span four orders of magnitude, so both the applicability
/// check and the goodness-of-fit test pass.
pub fn benford_tokens() -> Vec<NumericToken> {
    let counts: [usize; 9] = [45, 26, 19, 15, 12, 10, 9, 8, 6];
    let mut tokens = Vec::new();
    for (i, &n) in counts.iter().enumerate() {
        let digit = (i + 1) as u64;
        for k in 0..n {
            tokens.push(NumericToken::from(digit * 10u64.pow((k % 4) as u32)));
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicability::{is_applicable, parse_values};
    use crate::digits::first_digit;

    #[test]
    fn test_benford_tokens_shape() {
        let tokens = benford_tokens();
        assert_eq!(tokens.len(), 150);
        assert!(is_applicable(&parse_values(&tokens)));

        let ones = tokens.iter().filter(|t| first_digit(t) == 1).count();
        assert_eq!(ones, 45);
    }
}
