//! Aggregate request-latency accounting.
//!
//! The request count is bumped by the submission path at ID-allocation time,
//! so it reflects submissions accepted, not computations finished. The total
//! covers only the synchronous handling portion of each submission; the
//! artificial delay and the digest computation happen after the submission
//! call has already returned and are deliberately excluded from the average.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Running totals behind the `stats` operation.
///
/// Both fields only ever increase. They are updated at different points in a
/// submission's life (count at allocation, total at handler exit), so a
/// snapshot taken mid-submission may observe the count without the matching
/// elapsed time. That skew is bounded by the in-flight submission count and
/// accepted by design.
#[derive(Debug, Default)]
pub struct RequestStats {
    requests: AtomicU64,
    total_micros: AtomicU64,
}

/// Point-in-time view of the accumulator.
///
/// Serialized field names (`Total`, `Average`) are part of the HTTP contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Submissions accepted so far.
    #[serde(rename = "Total")]
    pub total: u64,
    /// Average synchronous handling time per submission, in microseconds,
    /// truncated toward zero.
    #[serde(rename = "Average")]
    pub average: u64,
}

impl RequestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one accepted submission.
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds the synchronous handling duration of one submission.
    pub fn record_elapsed(&self, micros: u64) {
        self.total_micros.fetch_add(micros, Ordering::Relaxed);
    }

    /// Returns the request count and truncated average. Reports `(0, 0)`
    /// while either counter is still zero rather than dividing: a clean
    /// "no data yet" state instead of an error.
    pub fn snapshot(&self) -> StatsSnapshot {
        let requests = self.requests.load(Ordering::Relaxed);
        let total_micros = self.total_micros.load(Ordering::Relaxed);

        if requests == 0 || total_micros == 0 {
            return StatsSnapshot { total: 0, average: 0 };
        }

        StatsSnapshot {
            total: requests,
            average: total_micros / requests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(requests: u64, total_micros: u64) -> RequestStats {
        let stats = RequestStats::new();
        for _ in 0..requests {
            stats.record_request();
        }
        stats.record_elapsed(total_micros);
        stats
    }

    #[test]
    fn fresh_accumulator_reports_zeros() {
        let stats = RequestStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot { total: 0, average: 0 });
    }

    #[test]
    fn count_without_elapsed_still_reports_zeros() {
        let stats = RequestStats::new();
        stats.record_request();
        assert_eq!(stats.snapshot(), StatsSnapshot { total: 0, average: 0 });
    }

    #[test]
    fn average_truncates_toward_zero() {
        assert_eq!(
            seeded(3, 789).snapshot(),
            StatsSnapshot { total: 3, average: 263 }
        );
        assert_eq!(
            seeded(33, 7892).snapshot(),
            StatsSnapshot { total: 33, average: 239 }
        );
    }

    #[test]
    fn average_matches_floored_sum_over_count() {
        let durations = [120_u64, 7, 3_301, 45, 999, 1];
        let stats = RequestStats::new();
        for d in durations {
            stats.record_request();
            stats.record_elapsed(d);
        }
        let sum: u64 = durations.iter().sum();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total, durations.len() as u64);
        assert_eq!(snapshot.average, sum / durations.len() as u64);
    }

    #[test]
    fn snapshot_serializes_with_contract_field_names() {
        let json = serde_json::to_value(seeded(33, 7892).snapshot()).unwrap();
        assert_eq!(json, serde_json::json!({ "Total": 33, "Average": 239 }));
    }
}
