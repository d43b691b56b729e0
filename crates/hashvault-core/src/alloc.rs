//! Sequential submission ID allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Allocates strictly increasing submission IDs, starting at 1.
///
/// Under N concurrent callers the returned set is exactly the next N
/// integers: no duplicates, no gaps. A single atomic fetch-add is the whole
/// story; there are no error conditions.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next ID in the sequence. The first call returns 1.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of IDs handed out so far.
    pub fn allocated(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
