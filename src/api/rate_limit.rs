//! Rate Limit Middleware
//!
//! Admits each request through the sliding-window limiter, keyed by client id.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::handlers::AppState;
use crate::error::{RangeCacheError, Result};

/// Header naming the calling client
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Client id used when the header is missing or not valid UTF-8
pub const ANONYMOUS_CLIENT: &str = "anonymous";

/// Rejects the request with 429 once its client is over the limit.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let client = request
        .headers()
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string();

    {
        let mut limiter = state.limiter.lock().await;
        if !limiter.record_message(&client) {
            let wait = limiter.time_until_next_allowed(&client);
            warn!("Rate limited client '{}' for {:?}", client, wait);
            return Err(RangeCacheError::RateLimited {
                retry_after_ms: u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
            });
        }
    }

    Ok(next.run(request).await)
}
