mod audio_store;
mod rate_limit_store;
mod transcription_provider;

pub use audio_store::{AudioStore, AudioStoreError};
pub use rate_limit_store::{ClientRateState, RateLimitStore};
pub use transcription_provider::{TranscriptionFailure, TranscriptionProvider};
