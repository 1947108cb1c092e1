use bytes::Bytes;

use crate::domain::StoragePath;

/// Staging area for uploaded audio. Objects live for at most one request.
#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<(), AudioStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, AudioStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
