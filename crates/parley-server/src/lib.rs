//! parley-server: HTTP front end that forwards chat messages to a hosted
//! language model.
//!
//! One route, `POST /api/chat`. Callers that send no session id share a
//! single conversation; callers that do get their own.

pub mod chat;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod registry;

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use parley_ai::AiClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{AppError, AppResult};
pub use registry::{SessionHandle, SessionRegistry};

/// Shared application state passed to the handler.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn AiClient>,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(client: Arc<dyn AiClient>, sessions: SessionRegistry) -> Self {
        Self { client, sessions }
    }
}

/// Build the router with CORS open to every origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat::chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
