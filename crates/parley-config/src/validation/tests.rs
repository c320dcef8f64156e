//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ParleyConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_port_zero() {
    let mut config = ParleyConfig::default();
    config.server.port = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = ParleyConfig::default();
    config.provider.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = ParleyConfig::default();
    config.provider.temperature = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.temperature"));
}

#[test]
fn catches_blank_model() {
    let mut config = ParleyConfig::default();
    config.provider.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.model must not be empty"));
}

#[test]
fn catches_zero_max_tokens() {
    let mut config = ParleyConfig::default();
    config.provider.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.max_tokens"));
}

#[test]
fn catches_short_idle_ttl() {
    let mut config = ParleyConfig::default();
    config.sessions.idle_ttl_secs = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sessions.idle_ttl_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ParleyConfig::default();
    config.sessions.max_sessions = 0;
    config.provider.timeout_secs = 0;
    config.sessions.reap_interval_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sessions.max_sessions"));
    assert!(err.contains("provider.timeout_secs"));
    assert!(err.contains("sessions.reap_interval_secs"));
    assert_eq!(err.matches(';').count(), 2);
}
