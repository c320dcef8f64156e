//! Gemini API client configuration.

use std::time::Duration;

/// Default Generative Language API endpoint.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = GeminiConfig::new("AIza-secret-value");
        let debug = format!("{config:?}");
        assert!(!debug.contains("AIza-secret-value"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("gemini-2.0-flash"));
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = GeminiConfig::new("k")
            .with_model("gemini-1.5-pro")
            .with_base_url("http://127.0.0.1:9/models")
            .with_max_tokens(256)
            .with_temperature(0.1)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url, "http://127.0.0.1:9/models");
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
