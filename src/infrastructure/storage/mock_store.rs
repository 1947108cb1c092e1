use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StoragePath;

/// In-memory store for tests.
#[derive(Default)]
pub struct MockAudioStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockAudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl AudioStore for MockAudioStore {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<(), AudioStoreError> {
        self.objects
            .lock()
            .unwrap()
            .insert(path.as_str().to_string(), data.to_vec());
        Ok(())
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, AudioStoreError> {
        self.objects
            .lock()
            .unwrap()
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| AudioStoreError::NotFound(path.as_str().to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), AudioStoreError> {
        self.objects
            .lock()
            .unwrap()
            .remove(path.as_str())
            .map(|_| ())
            .ok_or_else(|| AudioStoreError::DeleteFailed(path.as_str().to_string()))
    }
}
