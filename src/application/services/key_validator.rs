use std::sync::Arc;

use crate::application::ports::{TranscriptionFailure, TranscriptionProvider};

const KEY_PREFIX: &str = "sk-";

/// Pre-flight credential check plus one read-only provider round trip.
pub struct KeyValidator {
    provider: Arc<dyn TranscriptionProvider>,
    api_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No OpenAI API key configured")]
    MissingKey,
    #[error("Invalid API key format")]
    MalformedKey,
}

#[derive(Debug, thiserror::Error)]
pub enum KeyValidationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Provider(#[from] TranscriptionFailure),
}

impl KeyValidator {
    pub fn new(provider: Arc<dyn TranscriptionProvider>, api_key: Option<String>) -> Self {
        Self { provider, api_key }
    }

    /// Returns the provider's model count when the key is usable.
    ///
    /// Format problems are caught locally; no network call is made for them.
    pub async fn validate(&self) -> Result<usize, KeyValidationError> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKey)?;

        if !key.starts_with(KEY_PREFIX) {
            return Err(ConfigError::MalformedKey.into());
        }

        let model_count = self.provider.list_models().await?;

        tracing::debug!(model_count, "API key validated against provider");

        Ok(model_count)
    }
}
