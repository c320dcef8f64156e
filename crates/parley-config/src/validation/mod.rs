//! Full configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ParleyConfig;
use parley_common::ConfigError;

use helpers::{validate_non_empty, validate_range, validate_range_f64, validate_range_u64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ParleyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(&mut errors, "server.host", &config.server.host);
    validate_range(&mut errors, "server.port", config.server.port.into(), 1, 65535);

    let provider = &config.provider;
    validate_non_empty(&mut errors, "provider.model", &provider.model);
    validate_non_empty(&mut errors, "provider.base_url", &provider.base_url);
    validate_range(&mut errors, "provider.max_tokens", provider.max_tokens, 1, 65536);
    validate_range_f64(&mut errors, "provider.temperature", provider.temperature, 0.0, 2.0);
    validate_range(&mut errors, "provider.timeout_secs", provider.timeout_secs, 1, 600);

    let sessions = &config.sessions;
    validate_range_u64(&mut errors, "sessions.idle_ttl_secs", sessions.idle_ttl_secs, 60, 86400);
    validate_range(&mut errors, "sessions.max_sessions", sessions.max_sessions, 1, 100_000);
    validate_range_u64(
        &mut errors,
        "sessions.reap_interval_secs",
        sessions.reap_interval_secs,
        1,
        3600,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
