//! Property-Based Tests for Range Module
//!
//! Uses proptest to check the cached service against direct recomputation.

use proptest::prelude::*;

use crate::range::{ArrayStore, CachedRangeSum, RangeKey};

// == Strategies ==
#[derive(Debug, Clone)]
enum RangeOp {
    Query { left: usize, right: usize },
    Update { index: usize, value: i64 },
}

fn range_op_strategy(len: usize) -> impl Strategy<Value = RangeOp> {
    prop_oneof![
        3 => (0..len, 0..len).prop_map(|(a, b)| RangeOp::Query {
            left: a.min(b),
            right: a.max(b),
        }),
        1 => (0..len, -1000i64..1000).prop_map(|(index, value)| RangeOp::Update { index, value }),
    ]
}

/// An array plus an operation stream whose indices are all in bounds.
fn workload_strategy() -> impl Strategy<Value = (Vec<i64>, Vec<RangeOp>)> {
    prop::collection::vec(-1000i64..1000, 1..40).prop_flat_map(|values| {
        let len = values.len();
        (
            Just(values),
            prop::collection::vec(range_op_strategy(len), 1..120),
        )
    })
}

/// Cached ranges plus one in-bounds update index.
fn invalidation_strategy() -> impl Strategy<Value = (Vec<i64>, Vec<(usize, usize)>, usize)> {
    prop::collection::vec(-100i64..100, 1..30).prop_flat_map(|values| {
        let len = values.len();
        let ranges = prop::collection::vec(
            (0..len, 0..len).prop_map(|(a, b)| (a.min(b), a.max(b))),
            1..20,
        );
        (Just(values), ranges, 0..len)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // *For any* array and operation stream, every query through the cache SHALL
    // return exactly what direct recomputation returns at the same point.
    #[test]
    fn prop_cached_matches_uncached(
        (values, ops) in workload_strategy(),
        capacity in 1usize..16
    ) {
        let mut direct = ArrayStore::new(values.clone());
        let mut cached = CachedRangeSum::new(ArrayStore::new(values), capacity).unwrap();

        for op in ops {
            match op {
                RangeOp::Query { left, right } => {
                    let expected = direct.range_sum(left, right).unwrap();
                    prop_assert_eq!(cached.query(left, right).unwrap(), expected);
                }
                RangeOp::Update { index, value } => {
                    direct.set(index, value).unwrap();
                    cached.update(index, value).unwrap();
                }
            }
            prop_assert!(cached.cached_ranges() <= capacity);
        }

        prop_assert_eq!(cached.array(), &direct);
    }

    // *For any* set of cached ranges and update index i, afterwards exactly the
    // ranges containing i SHALL be gone and every other range SHALL keep its value.
    #[test]
    fn prop_invalidation_complete_and_precise(
        (values, ranges, index) in invalidation_strategy()
    ) {
        let array = ArrayStore::new(values);
        // Large enough that nothing is evicted
        let mut svc = CachedRangeSum::new(array, 64).unwrap();

        let mut unique = ranges;
        unique.sort_unstable();
        unique.dedup();

        for &(left, right) in &unique {
            svc.query(left, right).unwrap();
        }
        let before: Vec<(usize, usize, i64)> = unique
            .iter()
            .filter_map(|&(l, r)| svc.cached_sum(l, r).map(|sum| (l, r, sum)))
            .collect();

        let expected_dropped = before
            .iter()
            .filter(|(l, r, _)| *l <= index && index <= *r)
            .count();
        let dropped = svc.update(index, 12345).unwrap();
        prop_assert_eq!(dropped, expected_dropped);

        for (left, right, sum) in before {
            let key = RangeKey::new(left, right).unwrap();
            if key.contains(index) {
                prop_assert!(!svc.is_cached(left, right));
                prop_assert!(!svc.lookup(left, right).unwrap().hit);
            } else {
                prop_assert_eq!(svc.cached_sum(left, right), Some(sum));
                let lookup = svc.lookup(left, right).unwrap();
                prop_assert!(lookup.hit);
                prop_assert_eq!(lookup.sum, sum);
            }
        }
    }

    // *For any* valid range, two queries in a row SHALL agree and the second
    // SHALL be a cache hit.
    #[test]
    fn prop_miss_then_hit(
        values in prop::collection::vec(-50i64..50, 1..30),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>()
    ) {
        let len = values.len();
        let (left, right) = {
            let (x, y) = (a.index(len), b.index(len));
            (x.min(y), x.max(y))
        };
        let mut svc = CachedRangeSum::new(ArrayStore::new(values), 4).unwrap();

        let first = svc.lookup(left, right).unwrap();
        let second = svc.lookup(left, right).unwrap();

        prop_assert!(!first.hit);
        prop_assert!(second.hit);
        prop_assert_eq!(first.sum, second.sum);
        prop_assert_eq!(svc.stats().hits, 1);
        prop_assert_eq!(svc.stats().misses, 1);
    }
}
