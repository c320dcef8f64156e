use serde::{Deserialize, Serialize};

/// Caller-scoped session registry settings.
///
/// These only govern sessions named by a caller. The shared session used by
/// callers that send no session id lives for the whole process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionsConfig {
    /// Idle time after which a named session is dropped (valid range: 60-86400).
    pub idle_ttl_secs: u64,
    /// Maximum number of named sessions kept at once (valid range: 1-100000).
    pub max_sessions: u32,
    /// How often the reaper looks for idle sessions (valid range: 1-3600).
    pub reap_interval_secs: u64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: 1800,
            max_sessions: 1024,
            reap_interval_secs: 60,
        }
    }
}
