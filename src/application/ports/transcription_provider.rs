use async_trait::async_trait;

use crate::domain::{Transcript, UploadedAudio};

/// Boundary to the external speech-to-text provider.
///
/// One attempt per call; retry policy, if any, belongs to the caller.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Sends staged audio bytes to the provider's transcription operation.
    async fn transcribe(
        &self,
        audio: &UploadedAudio,
        data: Vec<u8>,
    ) -> Result<Transcript, TranscriptionFailure>;

    /// Read-only listing call, used to verify the configured credentials.
    /// Returns the number of models the provider reports.
    async fn list_models(&self) -> Result<usize, TranscriptionFailure>;
}

/// Normalized provider outcome. Raw transport errors never cross this
/// boundary; adapters map every failure into one of these kinds.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionFailure {
    #[error("OpenAI quota exceeded. Please check your OpenAI billing and usage limits.")]
    RateLimited { detail: String },
    #[error("Invalid OpenAI API key. Please check your API key configuration.")]
    Unauthorized { detail: String },
    #[error("Invalid audio format or request. Please try recording again.")]
    BadRequest { detail: String },
    #[error("Unable to connect to OpenAI API. Please check your internet connection.")]
    Unreachable { detail: String },
    #[error("Failed to transcribe audio")]
    Unknown {
        detail: String,
        provider_status: Option<u16>,
    },
}

impl TranscriptionFailure {
    /// Maps a provider HTTP status to a failure kind, keeping the raw
    /// response body as the detail.
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            429 => Self::RateLimited { detail },
            401 => Self::Unauthorized { detail },
            400 => Self::BadRequest { detail },
            _ => Self::Unknown {
                detail,
                provider_status: Some(status),
            },
        }
    }

    /// The provider's numeric status, where one exists for this kind.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::Unauthorized { .. } => Some(401),
            Self::BadRequest { .. } => Some(400),
            Self::Unreachable { .. } => None,
            Self::Unknown {
                provider_status, ..
            } => *provider_status,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::RateLimited { detail }
            | Self::Unauthorized { detail }
            | Self::BadRequest { detail }
            | Self::Unreachable { detail }
            | Self::Unknown { detail, .. } => detail,
        }
    }

    /// Stable wire name for the `code` field of error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RateLimited { .. } => "rate_limited",
            Self::Unauthorized { .. } => "unauthorized",
            Self::BadRequest { .. } => "bad_request",
            Self::Unreachable { .. } => "unreachable",
            Self::Unknown { .. } => "unknown",
        }
    }
}
