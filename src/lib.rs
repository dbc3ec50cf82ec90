//! Range Cache - LRU-backed range sums over a mutable array
//!
//! Caches inclusive range sums and drops exactly the cached ranges touched by
//! each point update, so every answer matches direct recomputation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod limiter;
pub mod models;
pub mod range;
pub mod tasks;
pub mod workload;

pub use api::AppState;
pub use config::Config;
pub use error::{RangeCacheError, Result};
pub use range::{ArrayStore, CachedRangeSum, RangeKey, RangeSumBackend};
pub use tasks::spawn_cleanup_task;
