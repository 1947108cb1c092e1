mod storage_path;
mod transcript;
mod uploaded_audio;

pub use storage_path::StoragePath;
pub use transcript::Transcript;
pub use uploaded_audio::UploadedAudio;
