//! The service object tying the engine together.

use crate::digest::digest;
use crate::error::{Error, Result};
use crate::sleep::{FixedSleeper, Sleeper};
use crate::stats::StatsSnapshot;
use crate::{DigestStore, DrainCoordinator, IdAllocator, RequestStats};
use core::time::Duration;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Handle to the digest service.
///
/// Cheap to clone; all clones share one engine. Construction is explicit
/// ([`HashService::new`] / [`HashService::with_sleeper`]) and teardown goes
/// through [`HashService::shutdown`] — there is no global state.
///
/// A submission allocates the next ID, registers in-flight work, spawns the
/// computation task, and returns the ID without waiting for the digest.
/// Completion order of computations is not guaranteed to match ID order;
/// "allocated but not yet stored" is a normal transient state for lookups.
#[derive(Clone)]
pub struct HashService {
    inner: Arc<Inner>,
}

struct Inner {
    allocator: IdAllocator,
    store: DigestStore,
    stats: RequestStats,
    sleeper: Arc<dyn Sleeper>,
    drain: DrainCoordinator,
}

impl HashService {
    /// Creates a service with the production 5-second computation delay.
    pub fn new() -> Self {
        Self::with_sleeper(Arc::new(FixedSleeper::default()))
    }

    /// Creates a service with a custom delay source. Tests substitute
    /// counting or gated sleepers here.
    pub fn with_sleeper(sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            inner: Arc::new(Inner {
                allocator: IdAllocator::new(),
                store: DigestStore::new(),
                stats: RequestStats::new(),
                sleeper,
                drain: DrainCoordinator::new(),
            }),
        }
    }

    /// Accepts a password for digest computation and returns its ID.
    ///
    /// Returns synchronously: the delay and the digest computation run in a
    /// background task. Only the synchronous portion of this call is charged
    /// to the latency accumulator.
    ///
    /// # Errors
    ///
    /// - [`Error::ShuttingDown`] once shutdown has begun.
    /// - [`Error::EmptyPassword`] for an empty password.
    ///
    /// Rejected submissions allocate no ID and record no accounting.
    pub fn submit(&self, password: &str) -> Result<u64> {
        let start = Instant::now();

        if self.inner.drain.is_closed() {
            return Err(Error::ShuttingDown);
        }
        if password.is_empty() {
            return Err(Error::EmptyPassword);
        }

        let id = self.inner.allocator.next();
        self.inner.stats.record_request();

        let inner = Arc::clone(&self.inner);
        let password = password.to_owned();
        self.inner.drain.spawn(async move {
            inner.sleeper.sleep().await;
            let encoded = digest(&password);
            debug!(id, "digest stored");
            inner.store.put(id, encoded);
        });

        self.inner
            .stats
            .record_elapsed(start.elapsed().as_micros() as u64);
        Ok(id)
    }

    /// Looks up the digest for an ID token.
    ///
    /// Side-effect free and idempotent: a completed ID returns the same
    /// digest on every call.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidId`] when `token` is not a non-negative integer.
    /// - [`Error::NotFound`] when no digest is stored for the ID, whether it
    ///   is still computing or was never allocated.
    pub fn lookup(&self, token: &str) -> Result<String> {
        let id: u64 = token.parse().map_err(|_| Error::InvalidId {
            token: token.to_owned(),
        })?;
        self.inner.store.get(id).ok_or(Error::NotFound { id })
    }

    /// Returns the request count and average synchronous handling latency.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.stats.snapshot()
    }

    /// Stops accepting submissions, then waits up to `timeout` for in-flight
    /// computations to finish. Returns whether the drain completed; a lossy
    /// shutdown is reported, not treated as fatal.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        info!(
            in_flight = self.inner.drain.in_flight(),
            "draining in-flight computations"
        );
        let drained = self.inner.drain.drain(timeout).await;
        if drained {
            info!("all in-flight computations finished");
        } else {
            warn!(
                in_flight = self.inner.drain.in_flight(),
                "drain timed out; proceeding with shutdown"
            );
        }
        drained
    }
}

impl Default for HashService {
    fn default() -> Self {
        Self::new()
    }
}
