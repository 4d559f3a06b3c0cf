//! Analysis Worker Thread
//!
//! Handles Benford analysis in a background thread to avoid blocking the
//! host. Receives requests via channel, drives the batch engine with
//! cancellation support, and sends responses back to the host thread.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::types::{AnalysisRequest, AnalysisResponse};
use crate::analyzer::AnalysisResult;
use crate::engine::{EagerYield, ResultSink, run_analysis};
use crate::error::DigitLensError;
use crate::histogram::{DigitHistogram, Progress};

/// Spawn the analysis worker thread
///
/// Creates a background thread that:
/// 1. Listens for analysis requests on the request channel
/// 2. Runs each analysis with cancellation checked at batch boundaries
/// 3. Streams progress and the terminal response back per request
///
/// Includes panic handling so a crashed run surfaces as an error
/// response instead of a silently dead thread.
pub fn spawn_worker(
    request_rx: Receiver<AnalysisRequest>,
    response_tx: Sender<AnalysisResponse>,
) {
    std::thread::spawn(move || {
        // Forward panics to the host before they kill the thread
        let response_tx_clone = response_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in analysis worker".to_string()
            };

            log::error!(
                "Analysis worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            // Use request_id = 0 to indicate worker-level error
            let _ = response_tx_clone.send(AnalysisResponse::Error {
                message: format!("Analysis worker crashed: {}", panic_msg),
                request_id: 0,
            });
        }));

        // Wrap the entire worker in catch_unwind to handle panics gracefully
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            // Single-threaded runtime; the engine yields but never spawns
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(request_rx, response_tx));
        }));

        // Restore the previous panic hook
        panic::set_hook(prev_hook);

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Analysis worker thread panicked: {}", panic_msg);
        }
    });
}

/// Main worker loop - processes requests until the channel closes
///
/// Uses blocking recv() which is fine in a dedicated thread.
async fn worker_loop(
    request_rx: Receiver<AnalysisRequest>,
    response_tx: Sender<AnalysisResponse>,
) {
    log::debug!("Analysis worker thread started");

    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "Worker received request {} ({} tokens)",
            request.request_id,
            request.tokens.len()
        );
        handle_request(request, &response_tx).await;
    }

    log::debug!("Analysis worker thread shutting down");
}

/// Handle a single analysis request
async fn handle_request(request: AnalysisRequest, response_tx: &Sender<AnalysisResponse>) {
    let AnalysisRequest {
        tokens,
        options,
        mode,
        request_id,
        cancel_token,
    } = request;

    // Check if already cancelled
    if cancel_token.is_cancelled() {
        let _ = response_tx.send(AnalysisResponse::Cancelled { request_id });
        return;
    }

    let mut sink = ChannelSink {
        request_id,
        response_tx: response_tx.clone(),
    };

    match run_analysis(&tokens, &options, &mut sink, &EagerYield, &cancel_token).await {
        Ok(outcome) => {
            log::debug!(
                "Request {} finished with verdict: {}",
                request_id,
                outcome.result.verdict
            );
            let _ = response_tx.send(AnalysisResponse::Complete {
                histogram: outcome.histogram,
                result: outcome.result,
                mode,
                request_id,
            });
        }
        Err(DigitLensError::Cancelled) => {
            log::debug!("Request {} was cancelled", request_id);
            let _ = response_tx.send(AnalysisResponse::Cancelled { request_id });
        }
        Err(e) => {
            log::debug!("Request {} failed: {}", request_id, e);
            let _ = response_tx.send(AnalysisResponse::Error {
                message: e.to_string(),
                request_id,
            });
        }
    }
}

/// Forwards per-batch snapshots onto the response channel. The terminal
/// responses are composed by `handle_request` once the run returns, so
/// completion and result callbacks are left empty here.
struct ChannelSink {
    request_id: u64,
    response_tx: Sender<AnalysisResponse>,
}

impl ResultSink for ChannelSink {
    fn on_progress(&mut self, histogram: &DigitHistogram, progress: Progress) {
        let _ = self.response_tx.send(AnalysisResponse::Progress {
            histogram: histogram.clone(),
            progress,
            request_id: self.request_id,
        });
    }

    fn on_complete(&mut self, _histogram: &DigitHistogram) {}

    fn on_result(&mut self, _result: &AnalysisResult) {}
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;
