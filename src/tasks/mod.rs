//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Limiter Cleanup: Forgets rate-limiter clients with empty windows

mod cleanup;

pub use cleanup::spawn_cleanup_task;
