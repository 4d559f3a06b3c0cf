//! Analysis Worker Types
//!
//! Type definitions for the analysis worker thread communication.
//! These types enable the request/response pattern with cancellation
//! support.

use tokio_util::sync::CancellationToken;

use crate::analyzer::AnalysisResult;
use crate::engine::AnalysisOptions;
use crate::histogram::{DigitHistogram, Progress};
use crate::report::AnalysisMode;
use crate::token::NumericToken;

/// Request to analyze one token sequence
#[derive(Debug)]
pub struct AnalysisRequest {
    /// Tokens to analyze, in source order
    pub tokens: Vec<NumericToken>,
    /// Batch size and significance threshold for this run
    pub options: AnalysisOptions,
    /// Provenance tag, carried through untouched for the presentation
    /// layer; the statistics never read it
    pub mode: AnalysisMode,
    /// Unique ID for tracking this request
    pub request_id: u64,
    /// Token for cancelling this run at the next batch boundary
    pub cancel_token: CancellationToken,
}

/// Response from an analysis run
#[derive(Debug)]
pub enum AnalysisResponse {
    /// Histogram snapshot after one batch
    Progress {
        /// Counts accumulated so far
        histogram: DigitHistogram,
        /// Share of the input processed
        progress: Progress,
        /// Request ID this response belongs to
        request_id: u64,
    },
    /// The run finished
    Complete {
        /// Final histogram over the whole sequence
        histogram: DigitHistogram,
        /// Verdict and test values
        result: AnalysisResult,
        /// Provenance tag from the request, returned untouched
        mode: AnalysisMode,
        /// Request ID this response belongs to
        request_id: u64,
    },
    /// The run was cancelled before completion
    Cancelled {
        /// Request ID that was cancelled
        request_id: u64,
    },
    /// The run failed
    Error {
        /// Human-readable failure description
        message: String,
        /// Request ID this response belongs to
        /// Note: request_id = 0 indicates a worker-level error
        request_id: u64,
    },
}

impl AnalysisResponse {
    /// The request this response belongs to.
    pub fn request_id(&self) -> u64 {
        match self {
            AnalysisResponse::Progress { request_id, .. }
            | AnalysisResponse::Complete { request_id, .. }
            | AnalysisResponse::Cancelled { request_id }
            | AnalysisResponse::Error { request_id, .. } => *request_id,
        }
    }
}
