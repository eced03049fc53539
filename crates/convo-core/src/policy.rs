//! Truncation policies for fitting a conversation within a token budget.
//!
//! Two policies coexist deliberately. Tail truncation keeps the most
//! recent messages that fit, with a minimum floor so short conversations
//! stay coherent. The pinned window keeps the opening and closing
//! exchanges and condenses everything between them into a summary message.
//!
//! Both treat the conversation as immutable input and return a new derived
//! sequence. Neither returns an error: summarization failure degrades to a
//! fixed fallback string rather than failing the chat request.

use crate::counter::TokenCounter;
use crate::message::Message;
use crate::summarizer::{summary_message, Summarizer, SUMMARY_FALLBACK};
use crate::types::{TokenBudget, TruncationResult, TruncationStrategy};

/// Keep the most recent messages that fit within the budget.
///
/// Walks from the newest message backwards, accumulating estimated tokens,
/// and stops before the first message that would exceed the budget. If
/// that leaves fewer than `min(min_keep, len)` messages, the last
/// `min(min_keep, len)` are kept instead, even when their estimate exceeds
/// the budget: coherence takes priority over strict budget compliance for
/// small conversations. A single over-budget message is therefore still
/// returned; truncation operates at message granularity only.
pub fn truncate_tail(
    messages: &[Message],
    budget: &TokenBudget,
    counter: &dyn TokenCounter,
    min_keep: usize,
) -> TruncationResult {
    if messages.is_empty() {
        return TruncationResult::empty();
    }

    let mut total_tokens: u32 = 0;
    let mut kept: Vec<Message> = Vec::new();

    // Start from most recent and work backwards
    for message in messages.iter().rev() {
        let msg_tokens = counter.count_message(message);
        if total_tokens.saturating_add(msg_tokens) > budget.max_tokens {
            break;
        }
        kept.push(message.clone());
        total_tokens = total_tokens.saturating_add(msg_tokens);
    }
    kept.reverse();

    let min_messages = min_keep.min(messages.len());
    if kept.len() < min_messages {
        let tail = &messages[messages.len() - min_messages..];
        let estimated_tokens = counter.count_messages(tail);
        if estimated_tokens > budget.max_tokens {
            tracing::warn!(
                "Retained window of {kept} messages ({tokens} tokens) exceeds budget ({budget} tokens)",
                kept = tail.len(),
                tokens = estimated_tokens,
                budget = budget.max_tokens
            );
        }
        return TruncationResult {
            messages: tail.to_vec(),
            dropped_count: messages.len() - tail.len(),
            estimated_tokens,
            summary: None,
        };
    }

    let dropped_count = messages.len() - kept.len();
    let estimated_tokens = counter.count_messages(&kept);
    TruncationResult {
        messages: kept,
        dropped_count,
        estimated_tokens,
        summary: None,
    }
}

/// Tail truncation with optional preservation of the opening message.
///
/// Runs [`truncate_tail`], then, when messages were dropped and
/// `keep_first_context` is set, re-prepends the first message of the
/// conversation if it still fits the budget alongside the kept tail. The
/// reported dropped count still reflects the tail walk; only the message
/// list and token estimate change when the opening message is restored.
pub fn smart_truncate(
    messages: &[Message],
    budget: &TokenBudget,
    counter: &dyn TokenCounter,
    min_keep: usize,
    keep_first_context: bool,
) -> TruncationResult {
    if messages.is_empty() {
        return TruncationResult::empty();
    }

    let mut result = truncate_tail(messages, budget, counter, min_keep);

    if keep_first_context && result.dropped_count > 0 {
        let first = &messages[0];
        let first_tokens = counter.count_message(first);
        // Only restore the opening message if it does not push past the limit
        if result.estimated_tokens.saturating_add(first_tokens) <= budget.max_tokens {
            result.messages.insert(0, first.clone());
            result.estimated_tokens = result.estimated_tokens.saturating_add(first_tokens);
        }
    }

    result
}

/// Pin the first `keep_first` and last `keep_last` messages and condense
/// everything between them into a single synthetic system message.
///
/// Conversations already within the budget, or with no more than
/// `keep_first + keep_last` messages, are returned unchanged. Failure of
/// the summarization call is absorbed here: the fixed [`SUMMARY_FALLBACK`]
/// text stands in so processing proceeds degraded rather than failing.
pub async fn condense_pinned(
    messages: &[Message],
    budget: &TokenBudget,
    counter: &dyn TokenCounter,
    summarizer: &dyn Summarizer,
    keep_first: usize,
    keep_last: usize,
) -> TruncationResult {
    if messages.is_empty() {
        return TruncationResult::empty();
    }

    let total_tokens = counter.count_messages(messages);
    if total_tokens <= budget.max_tokens {
        return TruncationResult::unchanged(messages, total_tokens);
    }

    // Too short to carve out a middle worth summarizing
    if messages.len() <= keep_first + keep_last {
        return TruncationResult::unchanged(messages, total_tokens);
    }

    let first = &messages[..keep_first];
    let last = &messages[messages.len() - keep_last..];
    let middle = &messages[keep_first..messages.len() - keep_last];

    // Single best-effort attempt; no retry, no propagation
    let summary = match summarizer.summarize(middle).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("Error summarizing chat history: {err}");
            SUMMARY_FALLBACK.to_string()
        }
    };

    let mut condensed = Vec::with_capacity(keep_first + 1 + keep_last);
    condensed.extend_from_slice(first);
    condensed.push(summary_message(&summary));
    condensed.extend_from_slice(last);

    let estimated_tokens = counter.count_messages(&condensed);
    TruncationResult {
        messages: condensed,
        dropped_count: middle.len(),
        estimated_tokens,
        summary: Some(summary),
    }
}

/// Apply the configured strategy to a conversation.
///
/// The summarizer is only consulted by the pinned strategy; tail
/// truncation is a pure computation.
pub async fn prepare_context(
    messages: &[Message],
    budget: &TokenBudget,
    counter: &dyn TokenCounter,
    strategy: &TruncationStrategy,
    summarizer: &dyn Summarizer,
) -> TruncationResult {
    match strategy {
        TruncationStrategy::Tail { min_keep } => {
            truncate_tail(messages, budget, counter, *min_keep)
        }
        TruncationStrategy::Pinned {
            keep_first,
            keep_last,
        } => {
            condense_pinned(messages, budget, counter, summarizer, *keep_first, *keep_last).await
        }
    }
}
