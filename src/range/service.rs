//! Cached Range-Sum Service
//!
//! Answers range-sum queries through an LRU cache and drops every cached
//! range touched by a point update.

use tracing::debug;

use crate::cache::{CacheStats, LruCache};
use crate::error::Result;
use crate::range::{oracle, ArrayStore, RangeKey};

// == Lookup ==
/// Result of one query, paired with whether the cache answered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub sum: i64,
    pub hit: bool,
}

// == Cached Range Sum ==
/// One array guarded by one cache.
///
/// Every cached entry `(l, r)` holds the current sum of `[l, r]`: any update
/// at an index inside `[l, r]` removes the entry before the call returns.
#[derive(Debug)]
pub struct CachedRangeSum {
    /// Array being summed
    array: ArrayStore,
    /// Cached sums by range
    cache: LruCache<RangeKey, i64>,
    /// Query and invalidation counters
    stats: CacheStats,
}

impl CachedRangeSum {
    // == Constructor ==
    /// Creates a service over `array` with a fresh cache of `capacity` entries.
    ///
    /// Fails with `InvalidCapacity` when `capacity` is zero.
    pub fn new(array: ArrayStore, capacity: usize) -> Result<Self> {
        Ok(Self::with_cache(array, LruCache::new(capacity)?))
    }

    /// Creates a service from an explicitly owned cache instance.
    ///
    /// Entries already in `cache` are dropped; they describe some other array.
    pub fn with_cache(array: ArrayStore, mut cache: LruCache<RangeKey, i64>) -> Self {
        cache.clear();
        let stats = CacheStats::new(cache.capacity());
        Self {
            array,
            cache,
            stats,
        }
    }

    // == Lookup ==
    /// Returns the sum of `[left, right]` and whether it came from the cache.
    ///
    /// A miss recomputes through the oracle and caches the result, possibly
    /// evicting the least recently used range.
    pub fn lookup(&mut self, left: usize, right: usize) -> Result<Lookup> {
        let key = self.array.check_range(left, right)?;

        if let Some(&sum) = self.cache.get(&key) {
            self.stats.record_hit();
            return Ok(Lookup { sum, hit: true });
        }

        self.stats.record_miss();
        let sum = oracle::range_sum(&self.array, left, right)?;
        debug!("Cache miss for [{}, {}], computed {}", left, right, sum);

        if let Some((evicted, _)) = self.cache.put(key, sum) {
            self.stats.record_eviction();
            debug!(
                "Evicted [{}, {}] to make room",
                evicted.left(),
                evicted.right()
            );
        }

        Ok(Lookup { sum, hit: false })
    }

    // == Query ==
    /// Returns the sum of `[left, right]`.
    pub fn query(&mut self, left: usize, right: usize) -> Result<i64> {
        self.lookup(left, right).map(|lookup| lookup.sum)
    }

    // == Update ==
    /// Writes `value` at `index`, then drops every cached range containing it.
    ///
    /// Returns the number of entries invalidated. Ranges not containing
    /// `index` keep both their value and their recency position.
    pub fn update(&mut self, index: usize, value: i64) -> Result<usize> {
        self.array.set(index, value)?;

        let mut invalidated = 0;
        for key in self.cache.keys() {
            if key.contains(index) && self.cache.delete(&key).is_some() {
                invalidated += 1;
            }
        }

        self.stats.record_invalidations(invalidated);
        if invalidated > 0 {
            debug!(
                "Update at {} invalidated {} cached ranges",
                index, invalidated
            );
        }

        Ok(invalidated)
    }

    // == Accessors ==
    /// Reads one array value. Does not touch the cache.
    pub fn get(&self, index: usize) -> Result<i64> {
        self.array.get(index)
    }

    /// Returns true if `[left, right]` is cached, without touching recency.
    pub fn is_cached(&self, left: usize, right: usize) -> bool {
        RangeKey::new(left, right)
            .map(|key| self.cache.contains_key(&key))
            .unwrap_or(false)
    }

    /// Returns the cached sum of `[left, right]`, without touching recency.
    pub fn cached_sum(&self, left: usize, right: usize) -> Option<i64> {
        let key = RangeKey::new(left, right).ok()?;
        self.cache.peek(&key).copied()
    }

    pub fn array(&self) -> &ArrayStore {
        &self.array
    }

    pub fn cached_ranges(&self) -> usize {
        self.cache.len()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.cache.len());
        stats
    }

    /// Gives back the array and the cache.
    pub fn into_parts(self) -> (ArrayStore, LruCache<RangeKey, i64>) {
        (self.array, self.cache)
    }
}
