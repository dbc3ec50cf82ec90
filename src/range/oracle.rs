//! Range-Sum Oracle
//!
//! Stateless recomputation of a range sum straight from the array.

use crate::error::{RangeCacheError, Result};
use crate::range::ArrayStore;

/// Sums indices `left..=right` of `array`.
///
/// Runs in time proportional to `right - left + 1`. Fails with `OutOfRange`
/// or `InvalidRange` for a bad range, and `SumOverflow` if the sum leaves `i64`.
pub fn range_sum(array: &ArrayStore, left: usize, right: usize) -> Result<i64> {
    let key = array.check_range(left, right)?;

    array.as_slice()[key.left()..=key.right()]
        .iter()
        .try_fold(0i64, |acc, &value| acc.checked_add(value))
        .ok_or(RangeCacheError::SumOverflow { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArrayStore {
        ArrayStore::new(vec![5, 1, 4, 2, 8])
    }

    #[test]
    fn test_range_sum_prefix() {
        assert_eq!(range_sum(&sample(), 0, 2), Ok(10));
    }

    #[test]
    fn test_range_sum_single_and_full() {
        let array = sample();
        assert_eq!(range_sum(&array, 3, 3), Ok(2));
        assert_eq!(range_sum(&array, 0, 4), Ok(20));
    }

    #[test]
    fn test_range_sum_negative_values() {
        let array = ArrayStore::new(vec![-3, 2, 0]);
        assert_eq!(range_sum(&array, 0, 1), Ok(-1));
    }

    #[test]
    fn test_range_sum_invalid() {
        let array = sample();
        assert!(matches!(
            range_sum(&array, 3, 1),
            Err(RangeCacheError::InvalidRange { .. })
        ));
        assert!(matches!(
            range_sum(&array, 0, 5),
            Err(RangeCacheError::OutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_range_sum_overflow() {
        let array = ArrayStore::new(vec![i64::MAX, 1]);
        assert_eq!(
            range_sum(&array, 0, 1),
            Err(RangeCacheError::SumOverflow { left: 0, right: 1 })
        );
        assert_eq!(range_sum(&array, 0, 0), Ok(i64::MAX));
    }
}
