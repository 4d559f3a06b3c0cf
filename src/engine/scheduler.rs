//! Injectable yield points for the batch loop.

use std::future::Future;

/// Where the accumulator suspends between batches.
///
/// The engine never blocks and never performs IO; a batch boundary is
/// its only suspension point. Implementations decide whether that
/// boundary actually defers to other work.
pub trait YieldPoint {
    /// Called between batches, never after the final one.
    fn pause(&self) -> impl Future<Output = ()>;
}

/// Runs every batch back to back. The right choice for CLI and
/// worker-thread use, where nothing shares the thread with the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct EagerYield;

impl YieldPoint for EagerYield {
    fn pause(&self) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Defers to the tokio task queue after each batch so a single-threaded
/// host can interleave rendering or input handling with a long run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CooperativeYield;

impl YieldPoint for CooperativeYield {
    fn pause(&self) -> impl Future<Output = ()> {
        tokio::task::yield_now()
    }
}
