use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::{StoragePath, UploadedAudio};

/// Provider hard limit on audio payload size.
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 3] = ["wav", "mp3", "m4a"];

/// Validates an uploaded audio payload and stages it for transcription.
pub struct UploadIngest {
    store: Arc<dyn AudioStore>,
    max_bytes: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("No audio file uploaded")]
    NoFile,
    #[error("Only audio files are allowed")]
    UnsupportedType { filename: String, mime_type: String },
    #[error("File too large. Maximum size is 25MB.")]
    TooLarge { size_bytes: u64 },
    #[error("Uploaded file is empty")]
    Empty,
    #[error("failed to stage upload: {0}")]
    Store(#[from] AudioStoreError),
}

impl IngestError {
    /// Store failures are internal; everything else is a client error.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

impl UploadIngest {
    pub fn new(store: Arc<dyn AudioStore>, max_bytes: u64) -> Self {
        Self { store, max_bytes }
    }

    /// Validates the payload and writes it to the staging store.
    ///
    /// The returned handle owns the staged object; the caller is responsible
    /// for removing it on every exit path of the enclosing request.
    pub async fn ingest(
        &self,
        original_name: &str,
        mime_type: &str,
        data: Bytes,
    ) -> Result<StagedAudio, IngestError> {
        if data.is_empty() {
            return Err(IngestError::Empty);
        }

        let size_bytes = data.len() as u64;
        if size_bytes > self.max_bytes {
            tracing::warn!(size_bytes, max_bytes = self.max_bytes, "Upload over size limit");
            return Err(IngestError::TooLarge { size_bytes });
        }

        if !accepts(original_name, mime_type) {
            tracing::warn!(
                filename = %original_name,
                mime_type = %mime_type,
                "Upload rejected by type filter"
            );
            return Err(IngestError::UnsupportedType {
                filename: original_name.to_string(),
                mime_type: mime_type.to_string(),
            });
        }

        let storage_path = StoragePath::for_upload(original_name);
        self.store.store(&storage_path, data).await?;

        tracing::debug!(path = %storage_path, size_bytes, "Audio staged");

        let audio = UploadedAudio::new(
            storage_path,
            original_name.to_string(),
            mime_type.to_string(),
            size_bytes,
        );

        Ok(StagedAudio::new(audio, Arc::clone(&self.store)))
    }
}

fn accepts(filename: &str, mime_type: &str) -> bool {
    if mime_type.starts_with("audio/") {
        return true;
    }
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Scoped handle to a staged upload.
///
/// Normal request paths call [`StagedAudio::remove`] exactly once before
/// responding. If the handle is dropped without removal (the handler future
/// was cancelled by a client disconnect), deletion is spawned as a
/// best-effort background task so the staged file never outlives the request.
pub struct StagedAudio {
    audio: UploadedAudio,
    store: Arc<dyn AudioStore>,
    removed: bool,
}

impl StagedAudio {
    fn new(audio: UploadedAudio, store: Arc<dyn AudioStore>) -> Self {
        Self {
            audio,
            store,
            removed: false,
        }
    }

    pub fn audio(&self) -> &UploadedAudio {
        &self.audio
    }

    /// Reads the staged bytes back for the provider call.
    pub async fn contents(&self) -> Result<Vec<u8>, AudioStoreError> {
        self.store.fetch(&self.audio.storage_path).await
    }

    /// Deletes the staged object. Failures are logged and swallowed; cleanup
    /// must never escalate past the request.
    pub async fn remove(mut self) {
        self.removed = true;
        if let Err(e) = self.store.delete(&self.audio.storage_path).await {
            tracing::warn!(
                path = %self.audio.storage_path,
                error = %e,
                "Failed to remove staged audio"
            );
        }
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        let store = Arc::clone(&self.store);
        let path = self.audio.storage_path.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                if let Err(e) = store.delete(&path).await {
                    tracing::warn!(path = %path, error = %e, "Failed to remove staged audio");
                }
            });
        }
    }
}
