use super::storage_path::StoragePath;

/// An accepted audio upload, staged on disk for the duration of one request.
///
/// Never outlives the request that created it; the backing object is removed
/// before the response is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub storage_path: StoragePath,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadedAudio {
    pub fn new(
        storage_path: StoragePath,
        original_name: String,
        mime_type: String,
        size_bytes: u64,
    ) -> Self {
        Self {
            storage_path,
            original_name,
            mime_type,
            size_bytes,
        }
    }
}
