use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use scribe::application::ports::{AudioStore, TranscriptionProvider};
use scribe::application::services::{KeyValidator, RateLimiter, UploadIngest};
use scribe::infrastructure::observability::{TracingConfig, init_tracing};
use scribe::infrastructure::ratelimit::InMemoryRateLimitStore;
use scribe::infrastructure::storage::LocalAudioStore;
use scribe::infrastructure::transcription::OpenAiTranscriber;
use scribe::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.provider.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; transcription requests will fail");
    }

    let audio_store: Arc<dyn AudioStore> = Arc::new(
        LocalAudioStore::new(settings.upload.dir.clone())
            .map_err(|e| anyhow::anyhow!("failed to prepare upload directory: {}", e))?,
    );

    let provider: Arc<dyn TranscriptionProvider> = Arc::new(OpenAiTranscriber::new(
        settings.provider.api_key.clone().unwrap_or_default(),
        Some(settings.provider.base_url.clone()),
        Some(settings.provider.model.clone()),
    ));

    let rate_limiter = Arc::new(RateLimiter::new(
        Arc::new(InMemoryRateLimitStore::new()),
        settings.rate_limit.max_requests,
        Duration::from_secs(settings.rate_limit.window_secs),
    ));

    let ingest = Arc::new(UploadIngest::new(
        Arc::clone(&audio_store),
        settings.upload.max_bytes,
    ));

    let key_validator = Arc::new(KeyValidator::new(
        Arc::clone(&provider),
        settings.provider.api_key.clone(),
    ));

    let state = AppState {
        rate_limiter,
        ingest,
        provider,
        key_validator,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
