//! Interpretive wording for every verdict and provenance pairing.
//!
//! The same verdict means different things for scraped text, transform
//! coefficients and pixel samples, so each pairing carries its own
//! caveat. Statistics never feed back from here.

use super::AnalysisMode;
use crate::analyzer::Verdict;

/// The caveat paragraph for a verdict, worded for where the tokens came
/// from.
pub fn explanation(verdict: Verdict, mode: AnalysisMode) -> &'static str {
    match (verdict, mode) {
        (Verdict::InsufficientData, AnalysisMode::Text) => {
            "Not enough valid numbers for analysis (at least 100 are needed). \
             Try a larger document or check that number extraction worked."
        }
        (Verdict::InsufficientData, AnalysisMode::Raw) => {
            "Not enough valid numbers for analysis (at least 100 are needed). \
             The coefficient extraction may have produced a truncated sample."
        }
        (Verdict::InsufficientData, AnalysisMode::Pixel) => {
            "Not enough valid numbers for analysis (at least 100 are needed). \
             Try an image with more non-empty pixels."
        }
        (Verdict::NotApplicable, AnalysisMode::Text) => {
            "These numbers may not be suitable for Benford's Law analysis. \
             The law applies to naturally occurring data spanning several \
             orders of magnitude, not to constrained values like IDs, \
             percentages or uniform measurements."
        }
        (Verdict::NotApplicable, AnalysisMode::Raw) => {
            "The extracted coefficients do not span enough orders of \
             magnitude for Benford's Law analysis. This often happens with \
             flat or heavily compressed images."
        }
        (Verdict::NotApplicable, AnalysisMode::Pixel) => {
            "Pixel values are confined to a narrow range (0-255) and often \
             do not follow Benford's Law in natural images. No verdict can \
             be drawn from this sample."
        }
        (Verdict::Anomalous, AnalysisMode::Text) => {
            "The first-digit distribution deviates significantly from \
             Benford's Law. This can suggest fabricated or manipulated \
             figures, but capture errors produce the same signature. Verify \
             the source before drawing conclusions."
        }
        (Verdict::Anomalous, AnalysisMode::Raw) => {
            "The coefficient distribution deviates significantly from \
             Benford's Law, which can indicate a synthetic or manipulated \
             image. Recompression artifacts can also trigger this result."
        }
        (Verdict::Anomalous, AnalysisMode::Pixel) => {
            "The pixel distribution deviates from Benford's Law. Treat this \
             with caution: pixel values do not reliably follow the law even \
             in untouched images."
        }
        (Verdict::Consistent, AnalysisMode::Text) => {
            "The first-digit distribution is consistent with Benford's Law, \
             as naturally occurring figures tend to be. Consistency is not \
             proof of authenticity."
        }
        (Verdict::Consistent, AnalysisMode::Raw) => {
            "The coefficient distribution is consistent with Benford's Law, \
             which is typical of unmodified photographic content."
        }
        (Verdict::Consistent, AnalysisMode::Pixel) => {
            "The pixel distribution happens to match Benford's Law. Pixel \
             analysis is a weak signal either way; prefer coefficient \
             analysis where available."
        }
    }
}
