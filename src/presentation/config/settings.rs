use std::path::PathBuf;

use crate::application::services::MAX_UPLOAD_BYTES;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub upload: UploadSettings,
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    pub trust_proxy: bool,
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                port: env_parsed("SERVER_PORT", 3000),
                trust_proxy: std::env::var("TRUST_PROXY")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(true),
            },
            provider: ProviderSettings {
                api_key: std::env::var("OPENAI_API_KEY")
                    .ok()
                    .filter(|k| !k.is_empty()),
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                model: std::env::var("WHISPER_MODEL")
                    .unwrap_or_else(|_| "whisper-1".to_string()),
            },
            upload: UploadSettings {
                dir: std::env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| std::env::temp_dir().join("scribe-uploads")),
                max_bytes: MAX_UPLOAD_BYTES,
            },
            rate_limit: RateLimitSettings {
                max_requests: env_parsed("RATE_LIMIT_MAX", 10),
                window_secs: env_parsed("RATE_LIMIT_WINDOW_SECS", 60),
            },
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
