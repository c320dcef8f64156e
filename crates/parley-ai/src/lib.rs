//! AI engine for Parley.
//!
//! Provides the Gemini API client and the conversation `Session` that
//! accumulates turns against any `AiClient`, with token usage tracking.

pub mod gemini;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_MODEL, GEMINI_API_BASE};
pub use session::Session;
pub use token_tracker::TokenTracker;

/// A provider that turns a conversation into one reply.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Provider name used for logging and usage tracking.
    fn provider(&self) -> &str;

    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl AiError {
    /// Classify a transport error, keeping the full source chain so the
    /// underlying cause (e.g. "Connection refused") reaches the caller.
    pub fn from_transport(err: reqwest::Error) -> Self {
        let mut description = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        if err.is_timeout() {
            AiError::Timeout(description)
        } else {
            AiError::NetworkError(description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 10,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::NetworkError("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            AiError::ApiError("HTTP 403 Forbidden: denied".into()).to_string(),
            "API error: HTTP 403 Forbidden: denied"
        );
        assert_eq!(
            AiError::Timeout("operation timed out".into()).to_string(),
            "Timeout: operation timed out"
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
