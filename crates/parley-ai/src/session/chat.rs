//! Async chat method for Session.

use tracing::debug;

use crate::{AiClient, AiError, Message};

use super::manager::Session;

impl Session {
    /// Send a user message and return the assistant's reply.
    ///
    /// The turn is appended to the history only when the provider call
    /// succeeds; on error the history is left untouched.
    pub async fn chat(
        &mut self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
    ) -> Result<String, AiError> {
        let pending = Message::user(user_message);
        let messages = self.build_messages(&pending);

        let response = client.send_message(&messages).await?;
        if response.content.is_empty() {
            return Err(AiError::ParseError("empty reply from provider".to_string()));
        }

        self.commit(pending, &response.content, &response.usage);
        debug!(
            provider = client.provider(),
            turns = self.turn_count(),
            calls = self.tracker.call_count(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            session_tokens = self.tracker.total_tokens(),
            "Turn committed"
        );

        Ok(response.content)
    }
}
