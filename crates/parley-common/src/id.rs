use std::fmt;

/// Longest caller-supplied session identifier accepted.
pub const MAX_SESSION_ID_LEN: usize = 128;

/// Short id used to tie together the log lines of one chat turn.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Identifier of a caller-scoped conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Parse a caller-supplied identifier.
    ///
    /// Surrounding whitespace is ignored. Returns `Ok(None)` for a blank
    /// value and `Err` when the value is longer than [`MAX_SESSION_ID_LEN`]
    /// or contains control characters.
    pub fn parse(raw: &str) -> Result<Option<Self>, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.len() > MAX_SESSION_ID_LEN {
            return Err(format!(
                "session id longer than {MAX_SESSION_ID_LEN} bytes"
            ));
        }
        if trimmed.chars().any(char::is_control) {
            return Err("session id contains control characters".into());
        }
        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
