//! Array Store Module
//!
//! Owned, fixed-length array of integers addressed by index.

use crate::error::{RangeCacheError, Result};
use crate::range::{oracle, RangeKey};

// == Array Store ==
/// Fixed-length sequence of integers, indices `0..len`.
///
/// Only point writes mutate it; it is never resized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayStore {
    values: Vec<i64>,
}

impl ArrayStore {
    // == Constructor ==
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    // == Get ==
    /// Reads the value at `index`.
    pub fn get(&self, index: usize) -> Result<i64> {
        self.check_index(index)?;
        Ok(self.values[index])
    }

    // == Set ==
    /// Overwrites the value at `index`.
    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        self.check_index(index)?;
        self.values[index] = value;
        Ok(())
    }

    // == Range Sum ==
    /// Sums indices `left..=right` by direct recomputation.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<i64> {
        oracle::range_sum(self, left, right)
    }

    // == Validation ==
    /// Fails with `OutOfRange` unless `index < len`.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.values.len() {
            return Err(RangeCacheError::OutOfRange {
                index,
                len: self.values.len(),
            });
        }
        Ok(())
    }

    /// Validates both endpoints, then their order, and returns the key.
    pub fn check_range(&self, left: usize, right: usize) -> Result<RangeKey> {
        self.check_index(left)?;
        self.check_index(right)?;
        RangeKey::new(left, right)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl From<Vec<i64>> for ArrayStore {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}
