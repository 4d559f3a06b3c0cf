//! Chi-squared goodness-of-fit against the Benford distribution.

use std::fmt;

use serde::Serialize;

use crate::applicability::MIN_SAMPLE_SIZE;
use crate::distribution::chi_squared_sf;
use crate::error::DigitLensError;
use crate::histogram::DigitHistogram;

/// Expected share of each leading digit 1 through 9 under Benford's
/// Law, as percentages rounded to one decimal. The nine entries sum to
/// exactly 100.0, which keeps expected counts summing to the sample
/// size.
pub const BENFORD_PERCENTAGES: [f64; 9] = [30.1, 17.6, 12.5, 9.7, 7.9, 6.7, 5.8, 5.1, 4.6];

/// Nine digit categories minus one constraint.
pub const DEGREES_OF_FREEDOM: f64 = 8.0;

/// Default p-value threshold below which a sample is flagged anomalous.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Terminal classification of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Fewer than 100 valid values; no statistic was computed.
    InsufficientData,
    /// The value set fails the applicability heuristic; no statistic
    /// was computed.
    NotApplicable,
    /// The first-digit distribution deviates significantly from
    /// Benford's Law.
    Anomalous,
    /// The first-digit distribution is consistent with Benford's Law.
    Consistent,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::InsufficientData => write!(f, "insufficient data"),
            Verdict::NotApplicable => write!(f, "not applicable"),
            Verdict::Anomalous => write!(f, "anomalous"),
            Verdict::Consistent => write!(f, "consistent"),
        }
    }
}

/// The computed statistic together with its significance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChiSquaredTest {
    /// Sum of (observed - expected)^2 / expected over digits 1..=9.
    pub statistic: f64,
    /// Upper-tail probability under 8 degrees of freedom.
    pub p_value: f64,
}

/// Outcome of one completed analysis run. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    /// Present exactly when the verdict is `Anomalous` or `Consistent`.
    pub test: Option<ChiSquaredTest>,
    /// Whether the value set passed the applicability heuristic.
    pub sample_compliant: bool,
}

/// Classifies a completed histogram against the Benford distribution.
///
/// Short-circuits to [`Verdict::InsufficientData`] below the minimum
/// sample size and to [`Verdict::NotApplicable`] when the caller's
/// applicability check failed. In both cases no statistic is computed.
/// A distribution-function fault surfaces as
/// [`DigitLensError::Numerical`] instead of being folded into a verdict.
pub fn analyze(
    histogram: &DigitHistogram,
    sample_compliant: bool,
    significance_level: f64,
) -> Result<AnalysisResult, DigitLensError> {
    if histogram.valid_total() < MIN_SAMPLE_SIZE as u64 {
        return Ok(AnalysisResult {
            verdict: Verdict::InsufficientData,
            test: None,
            sample_compliant,
        });
    }

    if !sample_compliant {
        return Ok(AnalysisResult {
            verdict: Verdict::NotApplicable,
            test: None,
            sample_compliant,
        });
    }

    let test = significance(chi_squared_statistic(histogram))?;
    let verdict = if test.p_value < significance_level {
        Verdict::Anomalous
    } else {
        Verdict::Consistent
    };

    Ok(AnalysisResult {
        verdict,
        test: Some(test),
        sample_compliant,
    })
}

/// The raw statistic for a histogram with a non-empty valid sample.
fn chi_squared_statistic(histogram: &DigitHistogram) -> f64 {
    let total = histogram.valid_total() as f64;
    let mut chi_squared = 0.0;
    for digit in 1..=9u8 {
        let observed = histogram.count(digit) as f64;
        // Always positive: every Benford share is above zero.
        let expected = BENFORD_PERCENTAGES[usize::from(digit) - 1] / 100.0 * total;
        let deviation = observed - expected;
        chi_squared += deviation * deviation / expected;
    }
    chi_squared
}

/// Derives the p-value, rejecting any non-finite or out-of-range result.
fn significance(statistic: f64) -> Result<ChiSquaredTest, DigitLensError> {
    if !statistic.is_finite() {
        return Err(DigitLensError::Numerical(format!(
            "chi-squared statistic is not finite: {statistic}"
        )));
    }
    let p_value = chi_squared_sf(statistic, DEGREES_OF_FREEDOM);
    if !p_value.is_finite() || !(0.0..=1.0).contains(&p_value) {
        return Err(DigitLensError::Numerical(format!(
            "p-value out of range for statistic {statistic}: {p_value}"
        )));
    }
    Ok(ChiSquaredTest { statistic, p_value })
}
