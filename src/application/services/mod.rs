mod key_validator;
mod rate_limiter;
mod upload_ingest;

pub use key_validator::{ConfigError, KeyValidationError, KeyValidator};
pub use rate_limiter::{Admission, RateLimiter};
pub use upload_ingest::{IngestError, MAX_UPLOAD_BYTES, StagedAudio, UploadIngest};
