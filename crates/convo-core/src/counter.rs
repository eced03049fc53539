//! Token counting for window management.
//!
//! Provides heuristic token estimation (chars / 4) matching the budgets
//! the downstream generation API is sized against.

use crate::message::Message;
use std::sync::Arc;

/// Trait for token counting implementations.
pub trait TokenCounter: Send + Sync {
    /// Count tokens in a plain text string.
    fn count_text(&self, text: &str) -> u32;

    /// Count tokens in a single message.
    fn count_message(&self, message: &Message) -> u32 {
        self.count_text(&message.text)
    }

    /// Count tokens in multiple messages.
    fn count_messages(&self, messages: &[Message]) -> u32 {
        messages
            .iter()
            .map(|m| self.count_message(m))
            .fold(0u32, u32::saturating_add)
    }
}

/// Heuristic token counter using character-based estimation.
///
/// Uses the approximation tokens ≈ characters / 4 (English averages about
/// four characters per token), rounded up. Not tied to any specific
/// tokenizer; it will systematically misestimate for non-English text,
/// code, or unusual punctuation density. That imprecision is an accepted
/// tradeoff, not a defect.
#[derive(Debug, Clone)]
pub struct HeuristicTokenCounter {
    /// Characters per token ratio (default: 4)
    chars_per_token: u32,
}

impl HeuristicTokenCounter {
    /// Create a counter with a custom characters-per-token ratio.
    pub fn new(chars_per_token: u32) -> Self {
        Self {
            chars_per_token: chars_per_token.max(1),
        }
    }

    /// Create with the default ratio of 4 characters per token.
    pub fn with_defaults() -> Self {
        Self { chars_per_token: 4 }
    }
}

impl Default for HeuristicTokenCounter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TokenCounter for HeuristicTokenCounter {
    fn count_text(&self, text: &str) -> u32 {
        if text.is_empty() {
            return 0;
        }

        let char_count = text.chars().count() as u32;
        char_count.div_ceil(self.chars_per_token)
    }
}

/// Arc-wrapped token counter for easy sharing.
pub type SharedTokenCounter = Arc<dyn TokenCounter>;
