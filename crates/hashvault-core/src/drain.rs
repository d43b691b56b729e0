//! In-flight work tracking for graceful shutdown.

use core::time::Duration;
use std::future::Future;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Tracks the set of in-flight computation tasks and coordinates the
/// bounded drain at shutdown.
///
/// Tasks are registered by spawning them through [`DrainCoordinator::spawn`];
/// the tracker slot is released when the task finishes on any path,
/// including a panic, so a failed computation can never wedge shutdown.
/// Closing is one-way: once [`DrainCoordinator::drain`] has run, the
/// coordinator refuses admission forever.
#[derive(Debug, Default)]
pub struct DrainCoordinator {
    tracker: TaskTracker,
    closed: CancellationToken,
}

impl DrainCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `fut` as tracked in-flight work.
    pub fn spawn<F>(&self, fut: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.tracker.spawn(fut)
    }

    /// Whether shutdown has begun and new work should be refused.
    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled()
    }

    /// Number of tasks still running.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Stops admission and waits for in-flight tasks to finish, bounded by
    /// `timeout`. Returns whether the drain completed in time. Returns
    /// immediately when nothing is in flight.
    ///
    /// Exceeding the timeout is not an error here; the shutdown path decides
    /// whether a non-empty residue is acceptable.
    pub async fn drain(&self, limit: Duration) -> bool {
        self.closed.cancel();
        self.tracker.close();
        timeout(limit, self.tracker.wait()).await.is_ok()
    }
}
