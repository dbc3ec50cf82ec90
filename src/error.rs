//! Error types for the range cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Range Cache Error Enum ==
/// Unified error type for the array store, cache and HTTP surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeCacheError {
    /// Index or range endpoint outside `[0, len - 1]`
    #[error("Index {index} out of range for array of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Range with `left > right`
    #[error("Invalid range: left {left} is greater than right {right}")]
    InvalidRange { left: usize, right: usize },

    /// Capacity of zero at construction
    #[error("Invalid capacity: {0} (must be greater than zero)")]
    InvalidCapacity(usize),

    /// Sum does not fit in a signed 64-bit integer
    #[error("Sum overflow over range [{left}, {right}]")]
    SumOverflow { left: usize, right: usize },

    /// Client exceeded its sliding window
    #[error("Rate limited: retry after {retry_after_ms} ms")]
    RateLimited { retry_after_ms: u64 },

    /// Invalid request or configuration data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for RangeCacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            RangeCacheError::OutOfRange { .. }
            | RangeCacheError::InvalidRange { .. }
            | RangeCacheError::InvalidCapacity(_)
            | RangeCacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RangeCacheError::SumOverflow { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RangeCacheError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        match self {
            RangeCacheError::RateLimited { retry_after_ms } => {
                let retry_after_secs = retry_after_ms.div_ceil(1000).to_string();
                (status, [(header::RETRY_AFTER, retry_after_secs)], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the range cache.
pub type Result<T> = std::result::Result<T, RangeCacheError>;
