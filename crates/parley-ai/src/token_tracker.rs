//! Token usage tracking for a conversation.

use crate::TokenUsage;

/// Tracks cumulative token usage across the turns of one session.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    /// Number of API calls made.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    /// Get total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Get number of API calls.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_calls_and_tokens() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        });
        tracker.record(&TokenUsage {
            input_tokens: 1,
            output_tokens: 1,
        });

        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.total_tokens(), 17);
    }

    #[test]
    fn totals_saturate() {
        let mut tracker = TokenTracker::new();
        let huge = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 0,
        };
        tracker.record(&huge);
        tracker.record(&huge);
        assert_eq!(tracker.total_tokens(), u64::MAX);
    }
}
