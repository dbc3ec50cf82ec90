//! API Handlers
//!
//! HTTP request handlers for each range cache endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::Result;
use crate::limiter::SlidingWindowRateLimiter;
use crate::models::{
    HealthResponse, StatsResponse, SumQuery, SumResponse, UpdateRequest, UpdateResponse,
    ValueResponse,
};
use crate::range::CachedRangeSum;
use crate::workload::random_array;

/// Application state shared across all handlers.
///
/// The array and its cache sit behind one mutex so an update's write and
/// its invalidation scan are never observed half done.
#[derive(Clone)]
pub struct AppState {
    /// Cached range-sum service
    pub service: Arc<Mutex<CachedRangeSum>>,
    /// Per-client admission control
    pub limiter: Arc<Mutex<SlidingWindowRateLimiter>>,
}

impl AppState {
    /// Creates a new AppState with the given service and limiter.
    pub fn new(service: CachedRangeSum, limiter: SlidingWindowRateLimiter) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
            limiter: Arc::new(Mutex::new(limiter)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fills the array with seeded values in `[1, 100]`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(config.array_seed);
        let array = random_array(config.array_size, 1, 100, &mut rng)?;
        let service = CachedRangeSum::new(array, config.cache_capacity)?;
        let limiter = SlidingWindowRateLimiter::new(
            Duration::from_secs(config.rate_window_secs),
            config.rate_max_requests,
        )?;
        Ok(Self::new(service, limiter))
    }
}

/// Handler for GET /sum?left=&right=
///
/// Returns the inclusive range sum and whether the cache answered it.
pub async fn sum_handler(
    State(state): State<AppState>,
    Query(query): Query<SumQuery>,
) -> Result<Json<SumResponse>> {
    // Lock needed for LRU promotion and stats update
    let mut service = state.service.lock().await;
    let lookup = service.lookup(query.left, query.right)?;

    Ok(Json(SumResponse {
        left: query.left,
        right: query.right,
        sum: lookup.sum,
        cached: lookup.hit,
    }))
}

/// Handler for PUT /update
///
/// Writes one value and drops every cached range containing its index.
pub async fn update_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<UpdateResponse>> {
    let mut service = state.service.lock().await;
    let invalidated = service.update(req.index, req.value)?;

    Ok(Json(UpdateResponse {
        index: req.index,
        value: req.value,
        invalidated,
    }))
}

/// Handler for GET /value/:index
pub async fn value_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ValueResponse>> {
    let service = state.service.lock().await;
    let value = service.get(index)?;

    Ok(Json(ValueResponse { index, value }))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let service = state.service.lock().await;
    Json(StatsResponse::new(&service.stats(), service.array().len()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
