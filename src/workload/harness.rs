//! Equivalence Harness
//!
//! Runs one operation stream through the cached and uncached paths and
//! compares their accumulated totals.

use std::time::{Duration, Instant};

use tracing::info;

use crate::cache::CacheStats;
use crate::error::{RangeCacheError, Result};
use crate::range::{ArrayStore, CachedRangeSum, RangeSumBackend};
use crate::workload::Operation;

// == Run Operations ==
/// Applies `ops` in order and returns the sum of every query result.
pub fn run_operations<B: RangeSumBackend + ?Sized>(backend: &mut B, ops: &[Operation]) -> Result<i64> {
    let mut total: i64 = 0;

    for op in ops {
        match *op {
            Operation::Range { left, right } => {
                let sum = backend.query(left, right)?;
                total = total
                    .checked_add(sum)
                    .ok_or(RangeCacheError::SumOverflow { left, right })?;
            }
            Operation::Update { index, value } => backend.update(index, value)?,
        }
    }

    Ok(total)
}

// == Equivalence Report ==
/// Totals and timings of one cached-versus-uncached comparison.
#[derive(Debug, Clone)]
pub struct EquivalenceReport {
    pub operations: usize,
    pub uncached_total: i64,
    pub cached_total: i64,
    pub uncached_elapsed: Duration,
    pub cached_elapsed: Duration,
    /// Counters of the cached run
    pub stats: CacheStats,
}

impl EquivalenceReport {
    /// True when both paths produced the same total.
    pub fn is_consistent(&self) -> bool {
        self.uncached_total == self.cached_total
    }

    /// Uncached time divided by cached time.
    pub fn speedup(&self) -> f64 {
        let cached = self.cached_elapsed.as_secs_f64();
        if cached > 0.0 {
            self.uncached_elapsed.as_secs_f64() / cached
        } else {
            f64::INFINITY
        }
    }
}

// == Compare ==
/// Runs `ops` over two independent copies of `base`: first by direct
/// recomputation, then through a fresh cache of `capacity` entries.
pub fn compare(base: &ArrayStore, ops: &[Operation], capacity: usize) -> Result<EquivalenceReport> {
    let mut direct = base.clone();
    let started = Instant::now();
    let uncached_total = run_operations(&mut direct, ops)?;
    let uncached_elapsed = started.elapsed();
    info!(
        "Uncached run: total={} in {:.3}s",
        uncached_total,
        uncached_elapsed.as_secs_f64()
    );

    let mut cached = CachedRangeSum::new(base.clone(), capacity)?;
    let started = Instant::now();
    let cached_total = run_operations(&mut cached, ops)?;
    let cached_elapsed = started.elapsed();
    let stats = cached.stats();
    info!(
        "Cached run: total={} in {:.3}s (hits={}, misses={}, invalidations={})",
        cached_total,
        cached_elapsed.as_secs_f64(),
        stats.hits,
        stats.misses,
        stats.invalidations
    );

    Ok(EquivalenceReport {
        operations: ops.len(),
        uncached_total,
        cached_total,
        uncached_elapsed,
        cached_elapsed,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ops() -> Vec<Operation> {
        vec![
            Operation::Range { left: 0, right: 2 },
            Operation::Range { left: 0, right: 2 },
            Operation::Update { index: 1, value: 100 },
            Operation::Range { left: 0, right: 2 },
        ]
    }

    #[test]
    fn test_run_operations_uncached() {
        let mut array = ArrayStore::new(vec![5, 1, 4, 2, 8]);
        assert_eq!(run_operations(&mut array, &sample_ops()), Ok(10 + 10 + 109));
        assert_eq!(array.get(1), Ok(100));
    }

    #[test]
    fn test_run_operations_cached() {
        let mut svc = CachedRangeSum::new(ArrayStore::new(vec![5, 1, 4, 2, 8]), 10).unwrap();
        assert_eq!(run_operations(&mut svc, &sample_ops()), Ok(129));

        let stats = svc.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.invalidations, 1);
    }

    #[test]
    fn test_run_operations_stops_on_error() {
        let mut array = ArrayStore::new(vec![1, 2]);
        let ops = [
            Operation::Update { index: 0, value: 7 },
            Operation::Range { left: 0, right: 2 },
            Operation::Update { index: 1, value: 7 },
        ];

        assert!(matches!(
            run_operations(&mut array, &ops),
            Err(RangeCacheError::OutOfRange { index: 2, .. })
        ));
        assert_eq!(array.as_slice(), &[7, 2]);
    }

    #[test]
    fn test_run_operations_total_overflow() {
        let mut array = ArrayStore::new(vec![i64::MAX]);
        let ops = [
            Operation::Range { left: 0, right: 0 },
            Operation::Range { left: 0, right: 0 },
        ];
        assert!(matches!(
            run_operations(&mut array, &ops),
            Err(RangeCacheError::SumOverflow { .. })
        ));
    }

    #[test]
    fn test_compare_leaves_base_untouched() {
        let base = ArrayStore::new(vec![5, 1, 4, 2, 8]);
        let report = compare(&base, &sample_ops(), 10).unwrap();

        assert!(report.is_consistent());
        assert_eq!(report.uncached_total, 129);
        assert_eq!(report.operations, 4);
        assert_eq!(base.as_slice(), &[5, 1, 4, 2, 8]);
    }

    #[test]
    fn test_speedup() {
        let report = EquivalenceReport {
            operations: 0,
            uncached_total: 0,
            cached_total: 0,
            uncached_elapsed: Duration::from_millis(300),
            cached_elapsed: Duration::from_millis(100),
            stats: CacheStats::new(1),
        };
        assert!((report.speedup() - 3.0).abs() < 1e-9);

        let instant = EquivalenceReport {
            cached_elapsed: Duration::ZERO,
            ..report
        };
        assert_eq!(instant.speedup(), f64::INFINITY);
    }
}
