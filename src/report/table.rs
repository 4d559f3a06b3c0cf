//! Plain-text digit table and verdict summary.

use std::fmt::Write;

use super::AnalysisMode;
use super::catalog::explanation;
use crate::analyzer::AnalysisResult;
use crate::histogram::DigitHistogram;

/// Renders the human-readable report: per-digit counts and percentages,
/// the excluded-token line, and the verdict with its test values.
pub fn render_table(
    histogram: &DigitHistogram,
    result: &AnalysisResult,
    mode: AnalysisMode,
) -> String {
    let mut out = String::new();

    if histogram.excluded() > 0 {
        let _ = writeln!(out, "Excluding {} invalid numbers", histogram.excluded());
    }

    let _ = writeln!(out, "Digit  Count  Percent");
    for digit in 1..=9u8 {
        let _ = writeln!(
            out,
            "{:<5}  {:>5}  {:>6.2}%",
            digit,
            histogram.count(digit),
            histogram.percent(digit)
        );
    }
    let _ = writeln!(out, "Total  {:>5}  100.00%", histogram.valid_total());

    let _ = writeln!(out);
    match &result.test {
        Some(test) => {
            let _ = writeln!(
                out,
                "Verdict: {} (chi-squared {:.2}, p-value {:.4})",
                result.verdict, test.statistic, test.p_value
            );
        }
        None => {
            let _ = writeln!(out, "Verdict: {}", result.verdict);
        }
    }
    let _ = writeln!(out, "{}", explanation(result.verdict, mode));

    out
}
