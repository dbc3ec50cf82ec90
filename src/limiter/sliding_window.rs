//! Sliding Window Rate Limiter
//!
//! Per-client admission control over a trailing time window.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::error::{RangeCacheError, Result};

// == Sliding Window Rate Limiter ==
/// Allows at most `max_requests` messages per client in any trailing `window`.
///
/// A client whose window empties is forgotten.
#[derive(Debug)]
pub struct SlidingWindowRateLimiter {
    window: Duration,
    max_requests: usize,
    /// Accepted message times per client, oldest first
    history: HashMap<String, VecDeque<Instant>>,
}

impl SlidingWindowRateLimiter {
    // == Constructor ==
    /// Fails with `InvalidCapacity` when `max_requests` is zero.
    pub fn new(window: Duration, max_requests: usize) -> Result<Self> {
        if max_requests == 0 {
            return Err(RangeCacheError::InvalidCapacity(max_requests));
        }

        Ok(Self {
            window,
            max_requests,
            history: HashMap::new(),
        })
    }

    // == Can Send ==
    /// True if `client` is under its limit right now.
    pub fn can_send_message(&mut self, client: &str) -> bool {
        self.can_send_message_at(client, Instant::now())
    }

    pub fn can_send_message_at(&mut self, client: &str, now: Instant) -> bool {
        self.cleanup_window(client, now);
        self.history
            .get(client)
            .map_or(true, |times| times.len() < self.max_requests)
    }

    // == Record ==
    /// Records a message for `client` if allowed. Returns whether it was recorded.
    pub fn record_message(&mut self, client: &str) -> bool {
        self.record_message_at(client, Instant::now())
    }

    pub fn record_message_at(&mut self, client: &str, now: Instant) -> bool {
        if !self.can_send_message_at(client, now) {
            return false;
        }

        self.history
            .entry(client.to_string())
            .or_default()
            .push_back(now);
        true
    }

    // == Time Until Next Allowed ==
    /// How long `client` must wait before its next message is allowed.
    pub fn time_until_next_allowed(&mut self, client: &str) -> Duration {
        self.time_until_next_allowed_at(client, Instant::now())
    }

    pub fn time_until_next_allowed_at(&mut self, client: &str, now: Instant) -> Duration {
        self.cleanup_window(client, now);

        match self.history.get(client) {
            Some(times) if times.len() >= self.max_requests => times
                .front()
                .map(|&oldest| (oldest + self.window).saturating_duration_since(now))
                .unwrap_or(Duration::ZERO),
            _ => Duration::ZERO,
        }
    }

    // == Prune ==
    /// Cleans every client window and returns how many clients were forgotten.
    pub fn prune(&mut self) -> usize {
        self.prune_at(Instant::now())
    }

    pub fn prune_at(&mut self, now: Instant) -> usize {
        let before = self.history.len();
        let boundary = now.checked_sub(self.window);

        self.history.retain(|_, times| {
            drop_expired(times, boundary);
            !times.is_empty()
        });

        before - self.history.len()
    }

    /// Number of clients with messages in their window.
    pub fn tracked_clients(&self) -> usize {
        self.history.len()
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    fn cleanup_window(&mut self, client: &str, now: Instant) {
        let boundary = now.checked_sub(self.window);
        let emptied = match self.history.get_mut(client) {
            Some(times) => {
                drop_expired(times, boundary);
                times.is_empty()
            }
            None => false,
        };

        if emptied {
            self.history.remove(client);
        }
    }
}

/// Drops timestamps at or before `boundary`.
fn drop_expired(times: &mut VecDeque<Instant>, boundary: Option<Instant>) {
    let Some(boundary) = boundary else {
        return;
    };
    while times.front().is_some_and(|&t| t <= boundary) {
        times.pop_front();
    }
}
