//! Limiter Module
//!
//! Sliding-window rate limiting for HTTP clients. Shares no state with the cache.

mod sliding_window;

pub use sliding_window::SlidingWindowRateLimiter;
