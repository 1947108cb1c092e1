use std::time::{Duration, Instant};

/// Counter state for one client key within the active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRateState {
    pub count: u32,
    pub window_reset_at: Instant,
}

/// Keyed window-counter storage behind the rate limiter.
///
/// `hit` is the whole contract: create, window-reset, and increment happen in
/// one atomic step, so concurrent requests for the same key cannot interleave
/// a read-check-increment. The default adapter is process-local; a clustered
/// deployment swaps in a shared implementation.
#[async_trait::async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Records one request for `key` at `now` and returns the resulting
    /// state. A missing or expired entry is replaced by a fresh window with
    /// `count == 1`.
    async fn hit(&self, key: &str, now: Instant, window: Duration) -> ClientRateState;

    /// Current state for `key`, if any window is active.
    async fn get(&self, key: &str) -> Option<ClientRateState>;
}
