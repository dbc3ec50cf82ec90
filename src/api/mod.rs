//! API Module
//!
//! HTTP handlers and routing for the range cache REST API.
//!
//! # Endpoints
//! - `GET /sum?left=&right=` - Inclusive range sum, cached
//! - `PUT /update` - Point update with invalidation
//! - `GET /value/:index` - Point read
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod rate_limit;
pub mod routes;

pub use handlers::*;
pub use rate_limit::{ANONYMOUS_CLIENT, CLIENT_ID_HEADER};
pub use routes::create_router;
