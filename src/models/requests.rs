//! Request DTOs for the range cache API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

/// Query string for the sum operation (GET /sum)
///
/// # Fields
/// - `left`: First index of the range (inclusive)
/// - `right`: Last index of the range (inclusive)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SumQuery {
    pub left: usize,
    pub right: usize,
}

/// Request body for the update operation (PUT /update)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateRequest {
    /// Index to overwrite
    pub index: usize,
    /// New value
    pub value: i64,
}
