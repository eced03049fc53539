//! Aggregate conversation statistics.

use crate::counter::TokenCounter;
use crate::message::{Message, Role};
use serde::{Deserialize, Serialize};

/// Aggregate statistics for a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationStats {
    /// Total messages in the conversation
    pub message_count: usize,
    /// Messages with the user role
    pub user_messages: usize,
    /// Messages with the model role
    pub model_messages: usize,
    /// Sum of the token estimates of every message
    pub estimated_tokens: u32,
    /// Mean character length across all messages, rounded to nearest
    pub average_message_length: u32,
}

/// Compute statistics for a conversation.
///
/// Pure function of the input sequence and the counter; no side effects.
/// An empty conversation reports zeros across the board.
pub fn conversation_stats(messages: &[Message], counter: &dyn TokenCounter) -> ConversationStats {
    let user_messages = messages.iter().filter(|m| m.role == Role::User).count();
    let model_messages = messages.iter().filter(|m| m.role == Role::Model).count();
    let estimated_tokens = counter.count_messages(messages);

    let average_message_length = if messages.is_empty() {
        0
    } else {
        let total_chars: usize = messages.iter().map(|m| m.text.chars().count()).sum();
        (total_chars as f64 / messages.len() as f64).round() as u32
    };

    ConversationStats {
        message_count: messages.len(),
        user_messages,
        model_messages,
        estimated_tokens,
        average_message_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::HeuristicTokenCounter;

    #[test]
    fn empty_conversation_reports_zeros() {
        let counter = HeuristicTokenCounter::default();
        let stats = conversation_stats(&[], &counter);

        assert_eq!(stats.message_count, 0);
        assert_eq!(stats.user_messages, 0);
        assert_eq!(stats.model_messages, 0);
        assert_eq!(stats.estimated_tokens, 0);
        assert_eq!(stats.average_message_length, 0);
    }

    #[test]
    fn counts_roles_separately() {
        let counter = HeuristicTokenCounter::default();
        let messages = vec![
            Message::user("What is the weather?"),
            Message::model("It's sunny."),
            Message::user("What about tomorrow?"),
            Message::system("[A summary of the conversation so far: greetings]"),
        ];

        let stats = conversation_stats(&messages, &counter);

        assert_eq!(stats.message_count, 4);
        assert_eq!(stats.user_messages, 2);
        assert_eq!(stats.model_messages, 1);
    }

    #[test]
    fn token_estimate_matches_counter() {
        let counter = HeuristicTokenCounter::default();
        let messages = vec![Message::user("Hello"), Message::model("Hi there")];

        let stats = conversation_stats(&messages, &counter);
        assert_eq!(stats.estimated_tokens, counter.count_messages(&messages));
    }

    #[test]
    fn average_length_rounds_to_nearest() {
        let counter = HeuristicTokenCounter::default();
        // Lengths 2 and 3 -> mean 2.5 -> rounds to 3
        let messages = vec![Message::user("ab"), Message::model("abc")];

        let stats = conversation_stats(&messages, &counter);
        assert_eq!(stats.average_message_length, 3);
    }
}
