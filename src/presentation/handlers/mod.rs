mod health;
mod transcribe;
mod validate_api;

pub use health::health_handler;
pub use transcribe::transcribe_handler;
pub use validate_api::validate_api_handler;
