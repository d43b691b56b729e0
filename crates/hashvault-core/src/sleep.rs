//! The artificial compute delay, abstracted so tests can swap in a zero-cost
//! or call-counting implementation instead of really waiting.

use core::time::Duration;
use futures::FutureExt;
use futures::future::BoxFuture;

/// A source of the artificial delay applied before each digest computation.
///
/// Object-safe so the service can hold an `Arc<dyn Sleeper>` and substitute
/// implementations at construction time.
pub trait Sleeper: Send + Sync + 'static {
    /// Suspends the calling task for the configured interval.
    fn sleep(&self) -> BoxFuture<'_, ()>;
}

/// The production [`Sleeper`]: a fixed interval via [`tokio::time::sleep`].
///
/// Models an expensive computation. The interval is constant per instance,
/// not configurable per call.
#[derive(Clone, Debug)]
pub struct FixedSleeper {
    delay: Duration,
}

impl FixedSleeper {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedSleeper {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Sleeper for FixedSleeper {
    fn sleep(&self) -> BoxFuture<'_, ()> {
        tokio::time::sleep(self.delay).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fixed_sleeper_waits_the_configured_interval() {
        let sleeper = FixedSleeper::new(Duration::from_secs(5));
        let start = Instant::now();
        sleeper.sleep().await;
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }
}
