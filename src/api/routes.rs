//! API Routes
//!
//! Configures the Axum router with all range cache endpoints.

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, stats_handler, sum_handler, update_handler, value_handler, AppState,
};
use super::rate_limit::rate_limit;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /sum?left=&right=` - Inclusive range sum
/// - `PUT /update` - Point update with invalidation
/// - `GET /value/:index` - Point read
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint (not rate limited)
///
/// # Middleware
/// - Rate limiting: per `x-client-id` sliding window
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let limited = Router::new()
        .route("/sum", get(sum_handler))
        .route("/update", put(update_handler))
        .route("/value/:index", get(value_handler))
        .route("/stats", get(stats_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit));

    Router::new()
        .merge(limited)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
