//! Configuration Module
//!
//! Handles loading server and benchmark configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::workload::WorkloadConfig;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached range sums
    pub cache_capacity: usize,
    /// Length of the array guarded by the cache
    pub array_size: usize,
    /// Seed for the initial array contents
    pub array_seed: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Rate limiter cleanup interval in seconds
    pub cleanup_interval: u64,
    /// Rate limiter window length in seconds
    pub rate_window_secs: u64,
    /// Requests allowed per client inside one window
    pub rate_max_requests: usize,
    /// Number of operations in a benchmark workload
    pub query_count: usize,
    /// Number of hot ranges in a benchmark workload
    pub hot_pool: usize,
    /// Probability a range query is drawn from the hot pool
    pub p_hot: f64,
    /// Probability an operation is a point update
    pub p_update: f64,
    /// Seed for the benchmark workload
    pub workload_seed: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached ranges (default: 1000)
    /// - `ARRAY_SIZE` - Array length (default: 100000)
    /// - `ARRAY_SEED` - Initial array seed (default: 42)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Limiter cleanup frequency in seconds (default: 1)
    /// - `RATE_WINDOW_SECS` - Limiter window in seconds (default: 10)
    /// - `RATE_MAX_REQUESTS` - Requests per window per client (default: 100)
    /// - `QUERY_COUNT` - Benchmark operation count (default: 50000)
    /// - `HOT_POOL` - Benchmark hot ranges (default: 30)
    /// - `P_HOT` - Hot range probability (default: 0.95)
    /// - `P_UPDATE` - Update probability (default: 0.03)
    /// - `WORKLOAD_SEED` - Benchmark workload seed (default: 42)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: env_or("CACHE_CAPACITY", defaults.cache_capacity),
            array_size: env_or("ARRAY_SIZE", defaults.array_size),
            array_seed: env_or("ARRAY_SEED", defaults.array_seed),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            rate_window_secs: env_or("RATE_WINDOW_SECS", defaults.rate_window_secs),
            rate_max_requests: env_or("RATE_MAX_REQUESTS", defaults.rate_max_requests),
            query_count: env_or("QUERY_COUNT", defaults.query_count),
            hot_pool: env_or("HOT_POOL", defaults.hot_pool),
            p_hot: env_or("P_HOT", defaults.p_hot),
            p_update: env_or("P_UPDATE", defaults.p_update),
            workload_seed: env_or("WORKLOAD_SEED", defaults.workload_seed),
        }
    }

    /// Builds the workload generator settings from this configuration.
    pub fn workload(&self) -> WorkloadConfig {
        WorkloadConfig {
            hot_pool: self.hot_pool,
            p_hot: self.p_hot,
            p_update: self.p_update,
            ..WorkloadConfig::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            array_size: 100_000,
            array_seed: 42,
            server_port: 3000,
            cleanup_interval: 1,
            rate_window_secs: 10,
            rate_max_requests: 100,
            query_count: 50_000,
            hot_pool: 30,
            p_hot: 0.95,
            p_update: 0.03,
            workload_seed: 42,
        }
    }
}

/// Reads `name` from the environment, falling back to `default` when unset or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
