//! Wire format of the chat endpoint.

use serde::Serialize;

/// Header a caller may use to name its conversation session.
pub const SESSION_HEADER: &str = "x-session-id";

/// Inbound chat request.
///
/// Parsed leniently: a body that is not a JSON object, or fields of the
/// wrong type, read as absent so the caller gets the same
/// "Missing message" answer as for an empty body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
            return Self::default();
        };
        let field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(str::to_owned);
        Self {
            message: field("message"),
            session_id: field("session_id"),
        }
    }
}

/// Successful reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error reply.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_and_session() {
        let req = ChatRequest::from_body(br#"{"message":"Hello","session_id":"phone-1"}"#);
        assert_eq!(req.message.as_deref(), Some("Hello"));
        assert_eq!(req.session_id.as_deref(), Some("phone-1"));
    }

    #[test]
    fn null_and_non_string_fields_read_as_absent() {
        let req = ChatRequest::from_body(br#"{"message":null,"session_id":7}"#);
        assert_eq!(req, ChatRequest::default());

        let req = ChatRequest::from_body(br#"{"message":42}"#);
        assert_eq!(req.message, None);
    }

    #[test]
    fn malformed_bodies_read_as_empty() {
        assert_eq!(ChatRequest::from_body(b""), ChatRequest::default());
        assert_eq!(ChatRequest::from_body(b"not json"), ChatRequest::default());
        assert_eq!(ChatRequest::from_body(br#"["Hello"]"#), ChatRequest::default());
    }

    #[test]
    fn responses_serialize_to_single_field() {
        let ok = serde_json::to_string(&ChatResponse {
            response: "R".into(),
        })
        .unwrap();
        assert_eq!(ok, r#"{"response":"R"}"#);

        let err = serde_json::to_string(&ErrorBody {
            error: "Missing message".into(),
        })
        .unwrap();
        assert_eq!(err, r#"{"error":"Missing message"}"#);
    }
}
