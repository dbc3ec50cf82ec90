//! Workload Generator
//!
//! Synthesizes a mixed stream of range queries and point updates with a
//! skewed "hot" subset of ranges.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{RangeCacheError, Result};
use crate::range::ArrayStore;

// == Operation ==
/// One step of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Sum of indices `left..=right`
    Range { left: usize, right: usize },
    /// Write `value` at `index`
    Update { index: usize, value: i64 },
}

impl Operation {
    pub fn is_update(&self) -> bool {
        matches!(self, Operation::Update { .. })
    }
}

// == Workload Config ==
/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadConfig {
    /// Number of distinct hot ranges
    pub hot_pool: usize,
    /// Probability a query is drawn from the hot pool
    pub p_hot: f64,
    /// Probability an operation is an update
    pub p_update: f64,
    /// Smallest value written by an update
    pub min_value: i64,
    /// Largest value written by an update
    pub max_value: i64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            hot_pool: 30,
            p_hot: 0.95,
            p_update: 0.03,
            min_value: 1,
            max_value: 100,
        }
    }
}

impl WorkloadConfig {
    /// Checks probabilities lie in `[0, 1]` and the value domain is non-empty.
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [("p_hot", self.p_hot), ("p_update", self.p_update)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(RangeCacheError::InvalidRequest(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }

        if self.min_value > self.max_value {
            return Err(RangeCacheError::InvalidRequest(format!(
                "min_value {} exceeds max_value {}",
                self.min_value, self.max_value
            )));
        }

        Ok(())
    }
}

// == Generate ==
/// Produces `count` operations over an array of length `n`.
///
/// Hot ranges start in the lower half and end in the upper half of the
/// array. Every produced index lies in `[0, n - 1]`.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    count: usize,
    config: &WorkloadConfig,
    rng: &mut R,
) -> Result<Vec<Operation>> {
    if n == 0 {
        return Err(RangeCacheError::InvalidRequest(
            "workload needs a non-empty array".to_string(),
        ));
    }
    config.validate()?;

    let mid = n / 2;
    let hot: Vec<(usize, usize)> = (0..config.hot_pool)
        .map(|_| (rng.gen_range(0..=mid), rng.gen_range(mid..n)))
        .collect();

    let mut operations = Vec::with_capacity(count);
    for _ in 0..count {
        if rng.gen_bool(config.p_update) {
            operations.push(Operation::Update {
                index: rng.gen_range(0..n),
                value: rng.gen_range(config.min_value..=config.max_value),
            });
            continue;
        }

        let hot_pick = if rng.gen_bool(config.p_hot) {
            hot.choose(rng).copied()
        } else {
            None
        };

        let (left, right) = match hot_pick {
            Some(range) => range,
            None => {
                let left = rng.gen_range(0..n);
                (left, rng.gen_range(left..n))
            }
        };
        operations.push(Operation::Range { left, right });
    }

    Ok(operations)
}

// == Random Array ==
/// Builds an array of `n` values drawn uniformly from `[min, max]`.
pub fn random_array<R: Rng + ?Sized>(n: usize, min: i64, max: i64, rng: &mut R) -> Result<ArrayStore> {
    if min > max {
        return Err(RangeCacheError::InvalidRequest(format!(
            "min {} exceeds max {}",
            min, max
        )));
    }

    Ok(ArrayStore::new(
        (0..n).map(|_| rng.gen_range(min..=max)).collect(),
    ))
}
