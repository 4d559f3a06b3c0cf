//! Dataset eligibility for Benford analysis.
//!
//! Benford's Law only emerges from data spanning several orders of
//! magnitude. A narrow or non-positive value range makes the chi-squared
//! test meaningless regardless of sample size, so the range is checked
//! before any statistic is computed.

use crate::token::NumericToken;

/// Minimum number of valid values for any verdict-bearing analysis.
pub const MIN_SAMPLE_SIZE: usize = 100;

/// The max/min ratio must exceed this for the law to apply.
pub const MIN_SPAN_RATIO: f64 = 100.0;

/// Parses tokens to decimal values, dropping those that do not parse.
pub fn parse_values(tokens: &[NumericToken]) -> Vec<f64> {
    tokens.iter().filter_map(NumericToken::value).collect()
}

/// Whether the value set is structurally eligible for Benford analysis.
///
/// Rejects samples smaller than [`MIN_SAMPLE_SIZE`], samples whose
/// minimum is not strictly positive, and samples whose max/min ratio is
/// [`MIN_SPAN_RATIO`] or less.
pub fn is_applicable(values: &[f64]) -> bool {
    if values.len() < MIN_SAMPLE_SIZE {
        return false;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    min > 0.0 && max / min > MIN_SPAN_RATIO
}
