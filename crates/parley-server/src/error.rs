//! Chat endpoint errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use parley_ai::AiError;
use thiserror::Error;

use crate::protocol::ErrorBody;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Errors a chat request can end in.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request carried no usable message.
    #[error("Missing message")]
    MissingMessage,

    /// The caller named a session with an unusable identifier.
    #[error("Invalid session id: {0}")]
    InvalidSession(String),

    /// The provider round trip failed.
    #[error(transparent)]
    Provider(#[from] AiError),

    /// The turn task died before producing a result.
    #[error("chat turn aborted: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingMessage | AppError::InvalidSession(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        assert_eq!(AppError::MissingMessage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingMessage.to_string(), "Missing message");
        assert_eq!(
            AppError::InvalidSession("too long".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn provider_errors_are_server_errors_with_description() {
        let err = AppError::from(AiError::NetworkError("Connection refused".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Network error: Connection refused");

        let err = AppError::from(AiError::RateLimited);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
