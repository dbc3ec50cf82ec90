//! Range Module
//!
//! Array store, range-sum oracle and the cached range-sum service.

mod array;
mod key;
pub mod oracle;
mod service;

#[cfg(test)]
mod property_tests;

pub use array::ArrayStore;
pub use key::RangeKey;
pub use service::{CachedRangeSum, Lookup};

use crate::error::Result;

// == Range Sum Backend ==
/// Query/update surface shared by the cached and uncached paths.
pub trait RangeSumBackend {
    /// Returns the sum of indices `left..=right`.
    fn query(&mut self, left: usize, right: usize) -> Result<i64>;

    /// Writes `value` at `index`.
    fn update(&mut self, index: usize, value: i64) -> Result<()>;
}

/// Direct recomputation with no cache.
impl RangeSumBackend for ArrayStore {
    fn query(&mut self, left: usize, right: usize) -> Result<i64> {
        self.range_sum(left, right)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<()> {
        self.set(index, value)
    }
}

impl RangeSumBackend for CachedRangeSum {
    fn query(&mut self, left: usize, right: usize) -> Result<i64> {
        CachedRangeSum::query(self, left, right)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<()> {
        CachedRangeSum::update(self, index, value).map(|_| ())
    }
}
