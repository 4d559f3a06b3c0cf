//! Machine-readable report.

use serde::Serialize;

use super::AnalysisMode;
use crate::analyzer::{AnalysisResult, Verdict};
use crate::histogram::DigitHistogram;

/// Everything a scripted consumer needs from one run. Interpretive
/// prose stays out; it belongs to human-facing output.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    mode: AnalysisMode,
    verdict: Verdict,
    sample_compliant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    chi_squared: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    p_value: Option<f64>,
    valid_total: u64,
    excluded: u64,
    histogram: &'a DigitHistogram,
}

/// Serializes one run as pretty-printed JSON.
pub fn render_json(
    histogram: &DigitHistogram,
    result: &AnalysisResult,
    mode: AnalysisMode,
) -> serde_json::Result<String> {
    let report = JsonReport {
        mode,
        verdict: result.verdict,
        sample_compliant: result.sample_compliant,
        chi_squared: result.test.map(|t| t.statistic),
        p_value: result.test.map(|t| t.p_value),
        valid_total: histogram.valid_total(),
        excluded: histogram.excluded(),
        histogram,
    };
    serde_json::to_string_pretty(&report)
}
