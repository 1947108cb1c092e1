use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::KeyValidationError;
use crate::presentation::state::AppState;

use super::transcribe::failure_status;

#[derive(Serialize)]
pub struct ValidKeyResponse {
    pub valid: bool,
    pub message: String,
    #[serde(rename = "modelCount")]
    pub model_count: usize,
}

#[derive(Serialize)]
pub struct InvalidKeyResponse {
    pub valid: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Read-only credential diagnostic. Format problems short-circuit locally;
/// otherwise the provider's model listing is consulted once.
pub async fn validate_api_handler(State(state): State<AppState>) -> Response {
    match state.key_validator.validate().await {
        Ok(model_count) => (
            StatusCode::OK,
            Json(ValidKeyResponse {
                valid: true,
                message: "OpenAI API key is valid".to_string(),
                model_count,
            }),
        )
            .into_response(),
        Err(KeyValidationError::Config(e)) => {
            tracing::warn!(error = %e, "API key failed pre-flight check");
            (
                StatusCode::BAD_REQUEST,
                Json(InvalidKeyResponse {
                    valid: false,
                    error: e.to_string(),
                    status: None,
                }),
            )
                .into_response()
        }
        Err(KeyValidationError::Provider(failure)) => {
            tracing::error!(
                code = failure.code(),
                provider_status = ?failure.provider_status(),
                "API key validation failed at provider"
            );
            (
                failure_status(&failure),
                Json(InvalidKeyResponse {
                    valid: false,
                    error: failure.to_string(),
                    status: failure.provider_status(),
                }),
            )
                .into_response()
        }
    }
}
