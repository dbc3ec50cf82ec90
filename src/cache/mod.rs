//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and its statistics.

mod lru;
mod stats;


// Re-export public types
pub use lru::LruCache;
pub use stats::CacheStats;
