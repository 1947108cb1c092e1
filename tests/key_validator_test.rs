use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use scribe::application::ports::{TranscriptionFailure, TranscriptionProvider};
use scribe::application::services::{ConfigError, KeyValidationError, KeyValidator};
use scribe::domain::{Transcript, UploadedAudio};

struct CountingProvider {
    model_count: usize,
    fail_status: Option<u16>,
    list_models_calls: AtomicUsize,
}

impl CountingProvider {
    fn with_models(model_count: usize) -> Self {
        Self {
            model_count,
            fail_status: None,
            list_models_calls: AtomicUsize::new(0),
        }
    }

    fn rejecting(status: u16) -> Self {
        Self {
            model_count: 0,
            fail_status: Some(status),
            list_models_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptionProvider for CountingProvider {
    async fn transcribe(
        &self,
        _audio: &UploadedAudio,
        _data: Vec<u8>,
    ) -> Result<Transcript, TranscriptionFailure> {
        unreachable!("key validation never transcribes")
    }

    async fn list_models(&self) -> Result<usize, TranscriptionFailure> {
        self.list_models_calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_status {
            Some(status) => Err(TranscriptionFailure::from_status(
                status,
                "bad key".to_string(),
            )),
            None => Ok(self.model_count),
        }
    }
}

#[tokio::test]
async fn given_no_key_when_validating_then_config_error_without_provider_call() {
    let provider = Arc::new(CountingProvider::with_models(5));
    let validator = KeyValidator::new(
        Arc::clone(&provider) as Arc<dyn TranscriptionProvider>,
        None,
    );

    let result = validator.validate().await;

    assert!(matches!(
        result,
        Err(KeyValidationError::Config(ConfigError::MissingKey))
    ));
    assert_eq!(provider.list_models_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_empty_key_when_validating_then_treated_as_missing() {
    let provider = Arc::new(CountingProvider::with_models(5));
    let validator = KeyValidator::new(
        Arc::clone(&provider) as Arc<dyn TranscriptionProvider>,
        Some(String::new()),
    );

    let result = validator.validate().await;

    assert!(matches!(
        result,
        Err(KeyValidationError::Config(ConfigError::MissingKey))
    ));
    assert_eq!(provider.list_models_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_key_without_expected_prefix_when_validating_then_format_error_without_provider_call()
{
    let provider = Arc::new(CountingProvider::with_models(5));
    let validator = KeyValidator::new(
        Arc::clone(&provider) as Arc<dyn TranscriptionProvider>,
        Some("not-an-openai-key".to_string()),
    );

    let result = validator.validate().await;

    assert!(matches!(
        result,
        Err(KeyValidationError::Config(ConfigError::MalformedKey))
    ));
    assert_eq!(provider.list_models_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_valid_key_when_validating_twice_then_same_outcome_each_time() {
    let provider = Arc::new(CountingProvider::with_models(42));
    let validator = KeyValidator::new(
        Arc::clone(&provider) as Arc<dyn TranscriptionProvider>,
        Some("sk-valid".to_string()),
    );

    assert_eq!(validator.validate().await.unwrap(), 42);
    assert_eq!(validator.validate().await.unwrap(), 42);
    assert_eq!(provider.list_models_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_provider_rejection_when_validating_then_failure_is_normalized() {
    let provider = Arc::new(CountingProvider::rejecting(401));
    let validator = KeyValidator::new(
        Arc::clone(&provider) as Arc<dyn TranscriptionProvider>,
        Some("sk-revoked".to_string()),
    );

    let result = validator.validate().await;

    assert!(matches!(
        result,
        Err(KeyValidationError::Provider(
            TranscriptionFailure::Unauthorized { .. }
        ))
    ));
}
