use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::ports::RateLimitStore;

/// Fixed-window request throttle, bucketed by client key.
///
/// The client key is a network-address heuristic, not an identity guarantee.
pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    max_requests: u32,
    window: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allow,
    Deny { retry_after_secs: u64 },
}

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, max_requests: u32, window: Duration) -> Self {
        Self {
            store,
            max_requests,
            window,
        }
    }

    pub async fn admit(&self, client_key: &str) -> Admission {
        self.admit_at(client_key, Instant::now()).await
    }

    pub async fn admit_at(&self, client_key: &str, now: Instant) -> Admission {
        let state = self.store.hit(client_key, now, self.window).await;

        if state.count <= self.max_requests {
            return Admission::Allow;
        }

        let remaining = state.window_reset_at.saturating_duration_since(now);
        let retry_after_secs = remaining.as_millis().div_ceil(1000).max(1) as u64;

        tracing::debug!(
            client_key,
            count = state.count,
            retry_after_secs,
            "Request denied by rate limiter"
        );

        Admission::Deny { retry_after_secs }
    }
}
