//! Near-limit advisory for conversations approaching their token budget.
//!
//! Lets callers warn before truncation becomes lossy: one threshold for a
//! soft "getting long" warning and a higher one for "start a new chat".

use crate::counter::TokenCounter;
use crate::message::Message;
use serde::{Deserialize, Serialize};

/// Threshold fraction for the soft warning tier.
pub const WARNING_THRESHOLD: f64 = 0.8;
/// Threshold fraction for the hard warning tier.
pub const CRITICAL_THRESHOLD: f64 = 0.9;

/// Two-tier classification of a conversation against its token limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LimitAdvisory {
    /// Comfortably within the limit
    Within,
    /// Getting long; worth warning the user
    Approaching,
    /// Should start a new conversation
    Critical,
}

/// True iff the conversation's estimate has reached `limit * threshold`.
///
/// Pure predicate with no side effects. `threshold` is a fraction in
/// `(0, 1]`.
pub fn is_near_limit(
    messages: &[Message],
    counter: &dyn TokenCounter,
    limit: u32,
    threshold: f64,
) -> bool {
    let tokens = counter.count_messages(messages);
    tokens as f64 >= limit as f64 * threshold
}

/// Classify a conversation against the two warning tiers.
pub fn advise(messages: &[Message], counter: &dyn TokenCounter, limit: u32) -> LimitAdvisory {
    if is_near_limit(messages, counter, limit, CRITICAL_THRESHOLD) {
        LimitAdvisory::Critical
    } else if is_near_limit(messages, counter, limit, WARNING_THRESHOLD) {
        LimitAdvisory::Approaching
    } else {
        LimitAdvisory::Within
    }
}
