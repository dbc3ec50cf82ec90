//! Limiter Cleanup Task
//!
//! Background task that periodically forgets clients whose window has emptied.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::limiter::SlidingWindowRateLimiter;

/// Spawns a background task that periodically prunes the rate limiter.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. The range cache is never touched here.
///
/// # Arguments
/// * `limiter` - Arc<Mutex<SlidingWindowRateLimiter>> shared reference to the limiter
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    limiter: Arc<Mutex<SlidingWindowRateLimiter>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting limiter cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut limiter_guard = limiter.lock().await;
                limiter_guard.prune()
            };

            if removed > 0 {
                info!("Limiter cleanup: forgot {} idle clients", removed);
            } else {
                debug!("Limiter cleanup: no idle clients found");
            }
        }
    })
}
