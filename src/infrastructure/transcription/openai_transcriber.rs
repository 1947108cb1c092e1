use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionFailure, TranscriptionProvider};
use crate::domain::{Transcript, UploadedAudio};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";
const LANGUAGE_HINT: &str = "en";

pub struct OpenAiTranscriber {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiTranscriber {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, base_url, model)
    }

    /// Accepts a pre-built client so deployments can attach their own
    /// timeout or proxy settings.
    pub fn with_client(
        client: reqwest::Client,
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[derive(Deserialize)]
struct ModelsResponse {
    data: Vec<ModelEntry>,
}

// Only the entry count matters; individual model fields are ignored.
#[derive(Deserialize)]
struct ModelEntry {}

#[async_trait]
impl TranscriptionProvider for OpenAiTranscriber {
    async fn transcribe(
        &self,
        audio: &UploadedAudio,
        data: Vec<u8>,
    ) -> Result<Transcript, TranscriptionFailure> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(data)
            .file_name(audio.original_name.clone())
            .mime_str(&audio.mime_type)
            .map_err(|e| TranscriptionFailure::BadRequest {
                detail: format!("mime: {}", e),
            })?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", LANGUAGE_HINT)
            .text("response_format", "json")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            size_bytes = audio.size_bytes,
            "Sending audio to OpenAI Whisper API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionFailure::from_status(status, body));
        }

        let result: TranscriptionResponse =
            response
                .json()
                .await
                .map_err(|e| TranscriptionFailure::Unknown {
                    detail: format!("parse response: {}", e),
                    provider_status: None,
                })?;

        tracing::info!(chars = result.text.len(), "Whisper transcription completed");

        Ok(Transcript::new(result.text.trim()))
    }

    async fn list_models(&self) -> Result<usize, TranscriptionFailure> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionFailure::from_status(status, body));
        }

        let result: ModelsResponse =
            response
                .json()
                .await
                .map_err(|e| TranscriptionFailure::Unknown {
                    detail: format!("parse response: {}", e),
                    provider_status: None,
                })?;

        Ok(result.data.len())
    }
}

fn map_transport_error(e: reqwest::Error) -> TranscriptionFailure {
    if e.is_connect() {
        TranscriptionFailure::Unreachable {
            detail: e.to_string(),
        }
    } else {
        TranscriptionFailure::Unknown {
            detail: format!("request: {}", e),
            provider_status: None,
        }
    }
}
