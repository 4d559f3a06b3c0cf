//! digitlens library - Benford's Law first-digit analysis
//!
//! This library exposes the statistical core of digitlens: leading-digit
//! extraction, incremental histogram accumulation with progress
//! reporting, the applicability heuristic, and the chi-squared verdict,
//! plus the worker-thread surface and report formatters the CLI is
//! built on.

pub mod analyzer;
pub mod applicability;
pub mod config;
pub mod digits;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod histogram;
pub mod loader;
pub mod report;

#[cfg(test)]
pub mod test_utils;
pub mod token;
pub mod worker;

// Re-export commonly used types for convenience
pub use analyzer::{AnalysisResult, ChiSquaredTest, Verdict};
pub use engine::{AnalysisOptions, AnalysisOutcome, run_analysis};
pub use error::DigitLensError;
pub use histogram::{DigitHistogram, Progress};
pub use report::AnalysisMode;
pub use token::NumericToken;
