use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::application::ports::{ClientRateState, RateLimitStore};

/// Process-local window-counter store.
///
/// The map-wide mutex serializes every per-key read-check-increment, which is
/// all the atomicity the rate limiter needs. State is lost on restart;
/// acceptable for a single-instance deployment.
#[derive(Default)]
pub struct InMemoryRateLimitStore {
    entries: Mutex<HashMap<String, ClientRateState>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RateLimitStore for InMemoryRateLimitStore {
    async fn hit(&self, key: &str, now: Instant, window: Duration) -> ClientRateState {
        let mut entries = self.entries.lock().unwrap();

        let state = entries
            .entry(key.to_string())
            .and_modify(|state| {
                if now > state.window_reset_at {
                    // Expired window is replaced, not merged.
                    *state = ClientRateState {
                        count: 1,
                        window_reset_at: now + window,
                    };
                } else {
                    state.count += 1;
                }
            })
            .or_insert(ClientRateState {
                count: 1,
                window_reset_at: now + window,
            });

        *state
    }

    async fn get(&self, key: &str) -> Option<ClientRateState> {
        self.entries.lock().unwrap().get(key).copied()
    }
}
