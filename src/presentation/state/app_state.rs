use std::sync::Arc;

use crate::application::ports::TranscriptionProvider;
use crate::application::services::{KeyValidator, RateLimiter, UploadIngest};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub rate_limiter: Arc<RateLimiter>,
    pub ingest: Arc<UploadIngest>,
    pub provider: Arc<dyn TranscriptionProvider>,
    pub key_validator: Arc<KeyValidator>,
    pub settings: Settings,
}
