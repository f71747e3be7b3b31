//! Request spacing for the TMDB API.

use std::time::{Duration, Instant};

/// Default minimum interval between requests (~40 req/s).
pub(crate) const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Enforces a minimum interval between consecutive requests.
///
/// TMDB allows roughly 40 requests per second per IP.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    /// Minimum interval between requests.
    min_interval: Duration,
    /// When the previous request was let through.
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Waits until the next request is allowed.
    pub(crate) async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval.saturating_sub(elapsed)).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
