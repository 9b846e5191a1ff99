//! Build-time Configuration
//!
//! Values are baked in from the environment when the bundle is built
//! (`API_URL=https://... trunk build`).

use taskboard_core::api::{ApiConfig, DEFAULT_API_URL};

/// Base URL of the REST API
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

/// Console log level name
pub const LOG_LEVEL: &str = match option_env!("LOG_LEVEL") {
    Some(level) => level,
    None => "info",
};

/// Delay before leaving the registration confirmation
pub const REGISTER_REDIRECT_MS: u32 = 2000;

pub fn api_config() -> ApiConfig {
    ApiConfig::new(API_URL)
}
