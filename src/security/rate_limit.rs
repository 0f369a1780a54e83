use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Sliding-window attempt counter keyed by an identifier
///
/// Call sites own the instance and pass it by reference; there is no
/// global state. The struct is not internally synchronized: a host with
/// true parallelism wraps it in a lock. Identifiers that go idle are not
/// evicted, which is acceptable at the scale this guards (login and quote
/// forms).
#[derive(Debug)]
pub struct RateLimiter {
    max_attempts: usize,
    window: Duration,
    attempts: HashMap<String, Vec<DateTime<Utc>>>,
}

impl RateLimiter {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
    pub const DEFAULT_WINDOW_MS: i64 = 15 * 60 * 1000;

    pub fn new(max_attempts: usize, window_ms: i64) -> Self {
        Self {
            max_attempts,
            window: Duration::milliseconds(window_ms),
            attempts: HashMap::new(),
        }
    }

    /// Record an attempt for `identifier` if the window still has room
    ///
    /// Returns `false` without recording anything when the identifier is
    /// already at capacity.
    pub fn is_allowed(&mut self, identifier: &str) -> bool {
        self.check_at(identifier, Utc::now())
    }

    /// Milliseconds until the oldest recorded attempt leaves the window;
    /// 0 when nothing is recorded
    pub fn remaining_time_ms(&self, identifier: &str) -> i64 {
        self.remaining_at(identifier, Utc::now())
    }

    fn check_at(&mut self, identifier: &str, now: DateTime<Utc>) -> bool {
        let attempts = self.attempts.entry(identifier.to_string()).or_default();

        // Only in-window timestamps survive a check
        attempts.retain(|&t| now - t < self.window);

        if attempts.len() >= self.max_attempts {
            tracing::trace!("rate limit hit for {}", identifier);
            return false;
        }

        attempts.push(now);
        true
    }

    fn remaining_at(&self, identifier: &str, now: DateTime<Utc>) -> i64 {
        let oldest = match self.attempts.get(identifier).and_then(|a| a.iter().min()) {
            Some(t) => *t,
            None => return 0,
        };

        (self.window - (now - oldest)).num_milliseconds().max(0)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_WINDOW_MS)
    }
}
