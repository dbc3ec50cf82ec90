//! Response DTOs for the range cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the sum operation (GET /sum)
#[derive(Debug, Clone, Serialize)]
pub struct SumResponse {
    pub left: usize,
    pub right: usize,
    /// Sum of the inclusive range
    pub sum: i64,
    /// Whether the cache answered without recomputation
    pub cached: bool,
}

/// Response body for the update operation (PUT /update)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub index: usize,
    pub value: i64,
    /// Number of cached ranges dropped by this update
    pub invalidated: usize,
}

/// Response body for a point read (GET /value/:index)
#[derive(Debug, Clone, Serialize)]
pub struct ValueResponse {
    pub index: usize,
    pub value: i64,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of LRU evictions
    pub evictions: u64,
    /// Number of entries dropped by updates
    pub invalidations: u64,
    /// Current number of cached ranges
    pub total_entries: usize,
    /// Maximum number of cached ranges
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Length of the guarded array
    pub array_len: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, array_len: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
            hit_rate: stats.hit_rate(),
            array_len,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_response_serialize() {
        let resp = SumResponse {
            left: 0,
            right: 2,
            sum: 10,
            cached: true,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"left":0,"right":2,"sum":10,"cached":true}"#);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            invalidations: 3,
            total_entries: 50,
            capacity: 100,
        };
        let resp = StatsResponse::new(&stats, 1000);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.invalidations, 3);
        assert_eq!(resp.array_len, 1000);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(&CacheStats::new(10), 0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Something went wrong"}"#);
    }
}
