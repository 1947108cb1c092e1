mod settings;

pub use settings::{ProviderSettings, RateLimitSettings, ServerSettings, Settings, UploadSettings};
