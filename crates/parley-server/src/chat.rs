//! `POST /api/chat`: forward one message to a conversation session.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use parley_common::{new_correlation_id, SessionId};
use tracing::Instrument;

use crate::error::{AppError, AppResult};
use crate::protocol::{ChatRequest, ChatResponse, SESSION_HEADER};
use crate::AppState;

pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<ChatResponse>> {
    let request = ChatRequest::from_body(&body);
    let message = request
        .message
        .filter(|m| !m.is_empty())
        .ok_or(AppError::MissingMessage)?;

    let session_id = resolve_session_id(request.session_id.as_deref(), &headers)?;
    let (handle, label) = match &session_id {
        Some(id) => (state.sessions.get_or_create(id).await, id.to_string()),
        None => (state.sessions.shared(), "shared".to_string()),
    };

    let span = tracing::info_span!("chat", cid = %new_correlation_id(), session = %label);
    let client = state.client.clone();

    // The turn runs on its own task so a caller hanging up does not cancel
    // the provider call or lose the committed turn.
    let turn = tokio::spawn(
        async move {
            let mut session = handle.lock().await;
            let result = session.chat(&*client, message).await;
            match &result {
                Ok(reply) => tracing::info!(reply_len = reply.len(), "Chat turn completed"),
                Err(e) => tracing::warn!(error = %e, "Provider call failed"),
            }
            result
        }
        .instrument(span),
    );

    let reply = turn
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(Json(ChatResponse { response: reply }))
}

/// Pick the caller's session id: the body field wins over the header.
fn resolve_session_id(
    from_body: Option<&str>,
    headers: &HeaderMap,
) -> AppResult<Option<SessionId>> {
    let raw = match from_body {
        Some(raw) => Some(raw),
        None => match headers.get(SESSION_HEADER) {
            Some(value) => Some(value.to_str().map_err(|_| {
                AppError::InvalidSession("header is not valid UTF-8".into())
            })?),
            None => None,
        },
    };

    match raw {
        Some(raw) => SessionId::parse(raw).map_err(AppError::InvalidSession),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn body_session_id_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_static("from-header"));

        let id = resolve_session_id(Some("from-body"), &headers).unwrap().unwrap();
        assert_eq!(id.as_str(), "from-body");

        let id = resolve_session_id(None, &headers).unwrap().unwrap();
        assert_eq!(id.as_str(), "from-header");
    }

    #[test]
    fn no_session_id_means_shared() {
        assert!(resolve_session_id(None, &HeaderMap::new()).unwrap().is_none());
        assert!(resolve_session_id(Some("  "), &HeaderMap::new()).unwrap().is_none());
    }

    #[test]
    fn oversized_session_id_is_rejected() {
        let raw = "s".repeat(parley_common::id::MAX_SESSION_ID_LEN + 1);
        let err = resolve_session_id(Some(&raw), &HeaderMap::new()).unwrap_err();
        assert!(matches!(err, AppError::InvalidSession(_)));
    }
}
