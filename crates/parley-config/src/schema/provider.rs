//! Language-model provider settings.
//!
//! The API key is not part of this schema; it comes from the environment.

use parley_ai::GeminiConfig;
use serde::{Deserialize, Serialize};

/// Provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub model: String,
    pub base_url: String,
    /// Maximum output tokens per reply (valid range: 1-65536).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    /// Optional system instruction sent with every turn.
    pub system_prompt: Option<String>,
}

/// Defaults come from the client's own, so the two cannot drift.
impl Default for ProviderConfig {
    fn default() -> Self {
        let client = GeminiConfig::new(String::new());
        Self {
            model: client.model,
            base_url: client.base_url,
            max_tokens: client.max_tokens,
            temperature: client.temperature,
            timeout_secs: u32::try_from(client.timeout.as_secs()).unwrap_or(u32::MAX),
            system_prompt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_client_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.model, parley_ai::DEFAULT_MODEL);
        assert_eq!(config.base_url, parley_ai::GEMINI_API_BASE);
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.timeout_secs, 120);
        assert!(config.system_prompt.is_none());
    }
}
