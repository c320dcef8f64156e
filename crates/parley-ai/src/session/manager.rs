//! Session struct and conversation management.

use crate::token_tracker::TokenTracker;
use crate::{Message, TokenUsage};

/// A conversation session with message history.
pub struct Session {
    /// Committed conversation history, alternating user and assistant.
    pub(super) messages: Vec<Message>,
    /// System prompt (prepended to every API call).
    pub(super) system_prompt: Option<String>,
    /// Token usage tracker.
    pub(super) tracker: TokenTracker,
}

impl Session {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            tracker: TokenTracker::new(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Messages to send for the next turn: system prompt, history, then
    /// the pending user message.
    pub(crate) fn build_messages(&self, pending: &Message) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.messages.len() + 2);
        if let Some(ref system) = self.system_prompt {
            msgs.push(Message::system(system.clone()));
        }
        msgs.extend(self.messages.iter().cloned());
        msgs.push(pending.clone());
        msgs
    }

    pub(super) fn commit(&mut self, user: Message, reply: &str, usage: &TokenUsage) {
        self.messages.push(user);
        self.messages.push(Message::assistant(reply));
        self.tracker.record(usage);
    }

    /// Get the full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of committed turns.
    pub fn turn_count(&self) -> usize {
        self.messages.len() / 2
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
