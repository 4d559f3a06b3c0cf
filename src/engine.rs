//! The incremental analysis engine.
//!
//! One run owns a private cursor and histogram, folds its token
//! sequence in fixed-size batches, reports after every batch through a
//! [`ResultSink`], and finishes with the chi-squared classification.
//! Between batches control passes to an injected [`YieldPoint`], and a
//! cancellation token is honored at every batch boundary. Nothing is
//! shared between runs.

mod accumulator;
mod runner;
mod scheduler;
mod sink;

pub use accumulator::{Accumulator, DEFAULT_BATCH_SIZE};
pub use runner::{AnalysisOptions, AnalysisOutcome, run_analysis};
pub use scheduler::{CooperativeYield, EagerYield, YieldPoint};
pub use sink::{NoopSink, ResultSink};
