//! Application configuration
//!
//! All settings come from the environment (with `.env` support in the
//! binary). The API key is optional here because the form can supply it at
//! runtime; everything else has a sensible default.

use log::warn;
use std::env;

/// Default chat model
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
/// Default image model
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";
/// Default OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default sampling temperature for chat
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
/// Default completion token budget
pub const DEFAULT_MAX_TOKENS: u32 = 600;

/// Runtime configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential; kept only in memory, never logged
    pub openai_api_key: Option<String>,
    pub chat_model: String,
    pub image_model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unparseable numeric overrides fall back to the default with a warning
    /// rather than aborting startup.
    pub fn from_env() -> Self {
        let temperature = env::var("MUSE_TEMPERATURE")
            .ok()
            .and_then(|v| match v.parse::<f32>() {
                Ok(t) if (0.0..=2.0).contains(&t) => Some(t),
                _ => {
                    warn!("Ignoring invalid MUSE_TEMPERATURE: {v}");
                    None
                }
            })
            .unwrap_or(DEFAULT_TEMPERATURE);

        let max_tokens = env::var("MUSE_MAX_TOKENS")
            .ok()
            .and_then(|v| match v.parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    warn!("Ignoring invalid MUSE_MAX_TOKENS: {v}");
                    None
                }
            })
            .unwrap_or(DEFAULT_MAX_TOKENS);

        Config {
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            chat_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            image_model: env::var("IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            base_url: env::var("OPENAI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            temperature,
            max_tokens,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chat_model, "gpt-4o-mini");
        assert_eq!(config.image_model, "gpt-image-1");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert!((config.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.max_tokens, 600);
        assert!(config.openai_api_key.is_none());
    }
}
