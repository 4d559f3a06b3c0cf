//! Analysis Worker Module
//!
//! Runs analyses in a background thread so a host UI or server loop is
//! never blocked by a long token sequence. Receives requests via
//! channel, drives the batch engine with cancellation support, and
//! streams progress plus one terminal response back per request.
//!
//! ## Architecture
//!
//! - Single background thread with std::sync::mpsc channels
//! - Current-thread tokio runtime driving the async engine
//! - Panic hook so a worker crash reaches the host as an error
//! - Request/Response pattern with cancellation tokens
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::mpsc::channel;
//! use digitlens::worker::{spawn_worker, AnalysisRequest, AnalysisResponse};
//! use tokio_util::sync::CancellationToken;
//!
//! let (request_tx, request_rx) = channel();
//! let (response_tx, response_rx) = channel();
//!
//! spawn_worker(request_rx, response_tx);
//!
//! request_tx.send(AnalysisRequest {
//!     tokens,
//!     options: AnalysisOptions::default(),
//!     mode: AnalysisMode::Text,
//!     request_id: 1,
//!     cancel_token: CancellationToken::new(),
//! }).unwrap();
//!
//! loop {
//!     match response_rx.recv().unwrap() {
//!         AnalysisResponse::Progress { progress, .. } => eprintln!("{progress}"),
//!         AnalysisResponse::Complete { result, .. } => break println!("{:?}", result.verdict),
//!         AnalysisResponse::Cancelled { .. } => break,
//!         AnalysisResponse::Error { message, .. } => break eprintln!("{message}"),
//!     }
//! }
//! ```

pub mod thread;
pub mod types;

// Re-exports for convenience
pub use thread::spawn_worker;
pub use types::{AnalysisRequest, AnalysisResponse};
