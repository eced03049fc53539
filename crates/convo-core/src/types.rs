//! Core types for conversation window management.

use crate::message::Message;
use serde::{Deserialize, Serialize};

/// Default minimum number of messages retained by the tail strategy
/// (two full user/model exchanges).
pub const DEFAULT_MIN_KEEP: usize = 4;
/// Default number of leading messages pinned for initial context.
pub const DEFAULT_KEEP_FIRST: usize = 2;
/// Default number of trailing messages pinned for recent context.
pub const DEFAULT_KEEP_LAST: usize = 8;

/// Token budget for a conversation sent to the generation API.
///
/// A ceiling on estimated input tokens, supplied by the caller and varying
/// by target model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenBudget {
    /// Maximum estimated tokens for the conversation
    pub max_tokens: u32,
}

impl TokenBudget {
    /// Create a budget with an explicit token ceiling.
    pub fn new(max_tokens: u32) -> Self {
        Self { max_tokens }
    }

    /// Create a budget from the built-in limits registry for a model.
    ///
    /// Uses the model's recommended conversation limit, which leaves room
    /// for the system instruction and the response.
    pub fn for_model(model: &str) -> Self {
        let registry = crate::limits::ModelLimitsRegistry::default();
        Self {
            max_tokens: registry.get_or_default(model).conversation_tokens,
        }
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        // Conservative conversation limit from the built-in table
        Self { max_tokens: 20_000 }
    }
}

/// Strategy for keeping a conversation within its token budget.
///
/// Both strategies are intentional and selected by the caller; neither is
/// canonical. Tail truncation drops oldest messages outright; the pinned
/// window preserves the opening exchange and condenses the middle into a
/// summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TruncationStrategy {
    /// Keep the most recent messages that fit, never fewer than `min_keep`
    Tail {
        /// Minimum number of messages to retain regardless of budget
        min_keep: usize,
    },
    /// Keep fixed head and tail windows, summarize everything between
    Pinned {
        /// Leading messages kept for initial context
        keep_first: usize,
        /// Trailing messages kept for recent context
        keep_last: usize,
    },
}

impl Default for TruncationStrategy {
    fn default() -> Self {
        Self::Tail {
            min_keep: DEFAULT_MIN_KEEP,
        }
    }
}

impl TruncationStrategy {
    /// The pinned window with its default head and tail sizes.
    pub fn pinned_defaults() -> Self {
        Self::Pinned {
            keep_first: DEFAULT_KEEP_FIRST,
            keep_last: DEFAULT_KEEP_LAST,
        }
    }
}

/// Result of applying a truncation strategy.
///
/// Always a new derived sequence, recomputed on every call; the caller's
/// conversation is never mutated and the result is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationResult {
    /// Messages to send downstream, in original order
    pub messages: Vec<Message>,
    /// Number of input messages not retained verbatim
    pub dropped_count: usize,
    /// Estimated token total for `messages`
    pub estimated_tokens: u32,
    /// Summary text for condensed middle messages, when one was produced
    pub summary: Option<String>,
}

impl TruncationResult {
    /// Result for an empty conversation.
    pub(crate) fn empty() -> Self {
        Self {
            messages: Vec::new(),
            dropped_count: 0,
            estimated_tokens: 0,
            summary: None,
        }
    }

    /// Pass-through result for a conversation kept unchanged.
    pub(crate) fn unchanged(messages: &[Message], estimated_tokens: u32) -> Self {
        Self {
            messages: messages.to_vec(),
            dropped_count: 0,
            estimated_tokens,
            summary: None,
        }
    }
}
