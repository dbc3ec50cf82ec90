//! Range Key Module
//!
//! Identifies an inclusive sub-range of the array.

use serde::Serialize;

use crate::error::{RangeCacheError, Result};

// == Range Key ==
/// Inclusive `(left, right)` index pair with `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RangeKey {
    left: usize,
    right: usize,
}

impl RangeKey {
    /// Creates a key, failing with `InvalidRange` when `left > right`.
    ///
    /// Bounds against a concrete array are checked by `ArrayStore::check_range`.
    pub fn new(left: usize, right: usize) -> Result<Self> {
        if left > right {
            return Err(RangeCacheError::InvalidRange { left, right });
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    /// Number of indices covered.
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// Returns true if `index` falls inside `[left, right]`.
    pub fn contains(&self, index: usize) -> bool {
        self.left <= index && index <= self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_new() {
        let key = RangeKey::new(2, 5).unwrap();
        assert_eq!(key.left(), 2);
        assert_eq!(key.right(), 5);
        assert_eq!(key.width(), 4);
    }

    #[test]
    fn test_key_single_index() {
        let key = RangeKey::new(3, 3).unwrap();
        assert_eq!(key.width(), 1);
        assert!(key.contains(3));
        assert!(!key.contains(2));
        assert!(!key.contains(4));
    }

    #[test]
    fn test_key_rejects_reversed() {
        assert_eq!(
            RangeKey::new(4, 1),
            Err(RangeCacheError::InvalidRange { left: 4, right: 1 })
        );
    }

    #[test]
    fn test_key_contains_endpoints() {
        let key = RangeKey::new(1, 3).unwrap();
        assert!(key.contains(1));
        assert!(key.contains(3));
        assert!(!key.contains(0));
        assert!(!key.contains(4));
    }

    #[test]
    fn test_key_equality() {
        assert_eq!(RangeKey::new(0, 2).unwrap(), RangeKey::new(0, 2).unwrap());
        assert_ne!(RangeKey::new(0, 2).unwrap(), RangeKey::new(0, 3).unwrap());
    }
}
