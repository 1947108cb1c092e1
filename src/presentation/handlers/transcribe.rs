use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::TranscriptionFailure;
use crate::application::services::{Admission, IngestError};
use crate::presentation::extract::ClientKey;
use crate::presentation::state::AppState;

const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    pub transcription: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct RateLimitedResponse {
    pub error: String,
    #[serde(rename = "retryAfter")]
    pub retry_after: u64,
}

#[derive(Serialize)]
pub struct FailureResponse {
    pub error: String,
    pub details: String,
    pub code: String,
}

/// Admission -> ingest -> transcribe -> cleanup -> respond.
///
/// The staged file is removed before any response is built, whatever the
/// provider call produced.
#[tracing::instrument(skip(state, client, multipart), fields(client = %client.0))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    client: ClientKey,
    mut multipart: Multipart,
) -> Response {
    if let Admission::Deny { retry_after_secs } = state.rate_limiter.admit(&client.0).await {
        tracing::warn!(retry_after_secs, "Transcription request rate limited");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(RateLimitedResponse {
                error: "Too many requests. Please wait before trying again.".to_string(),
                retry_after: retry_after_secs,
            }),
        )
            .into_response();
    }

    let mut upload: Option<(String, String, Bytes)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(AUDIO_FIELD) {
                    continue;
                }
                let filename = field.file_name().unwrap_or("audio.wav").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                match field.bytes().await {
                    Ok(data) => {
                        upload = Some((filename, mime_type, data));
                        break;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read audio field");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    let Some((filename, mime_type, data)) = upload else {
        tracing::warn!("Transcription request with no audio field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: IngestError::NoFile.to_string(),
            }),
        )
            .into_response();
    };

    tracing::debug!(
        filename = %filename,
        mime_type = %mime_type,
        bytes = data.len(),
        "Processing audio upload"
    );

    let staged = match state.ingest.ingest(&filename, &mime_type, data).await {
        Ok(staged) => staged,
        Err(e) if e.is_validation() => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to stage upload");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    error: "Failed to store uploaded audio".to_string(),
                    details: e.to_string(),
                    code: "storage".to_string(),
                }),
            )
                .into_response();
        }
    };

    let result = match staged.contents().await {
        Ok(bytes) => state.provider.transcribe(staged.audio(), bytes).await,
        // Read-back failure is internal; surface it through the same
        // normalized shape so cleanup and response mapping stay uniform.
        Err(e) => Err(TranscriptionFailure::Unknown {
            detail: format!("staged audio read-back: {}", e),
            provider_status: None,
        }),
    };

    staged.remove().await;

    match result {
        Ok(transcript) => {
            tracing::info!(chars = transcript.text.len(), "Transcription succeeded");
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    success: true,
                    transcription: transcript.text,
                }),
            )
                .into_response()
        }
        Err(failure) => {
            tracing::error!(
                code = failure.code(),
                provider_status = ?failure.provider_status(),
                detail = %failure.detail(),
                "Transcription failed"
            );
            failure_response(&failure)
        }
    }
}

/// Single place where provider failure kinds map to HTTP statuses.
pub(super) fn failure_status(failure: &TranscriptionFailure) -> StatusCode {
    match failure {
        TranscriptionFailure::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        TranscriptionFailure::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        TranscriptionFailure::BadRequest { .. } => StatusCode::BAD_REQUEST,
        TranscriptionFailure::Unreachable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        TranscriptionFailure::Unknown { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn failure_response(failure: &TranscriptionFailure) -> Response {
    (
        failure_status(failure),
        Json(FailureResponse {
            error: failure.to_string(),
            details: failure.detail().to_string(),
            code: failure.code().to_string(),
        }),
    )
        .into_response()
}
