//! Summarization seam for condensed conversation history.
//!
//! When the pinned truncation policy carves out the middle of a
//! conversation, a summarizer compresses that span into a single synthetic
//! system message so continuity survives the truncation.

use crate::message::Message;
use async_trait::async_trait;
use thiserror::Error;

/// Fixed fallback text substituted when the summarization call fails.
pub const SUMMARY_FALLBACK: &str = "...previous context summarized...";

/// Errors from a summarization backend.
///
/// These never escape the truncation policies; they are absorbed into
/// [`SUMMARY_FALLBACK`] at the call site.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The backend call failed (network, quota, malformed response)
    #[error("summarization backend error: {0}")]
    Backend(String),

    /// The backend returned no usable text
    #[error("summarization backend returned an empty response")]
    EmptyResponse,
}

/// Trait for summarization implementations.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Generate a concise natural-language summary of the key requests,
    /// facts, and decisions in the given span of messages.
    async fn summarize(&self, messages: &[Message]) -> Result<String, SummarizeError>;
}

/// Wrap summary text in the synthetic system message inserted in place of
/// the condensed middle of a conversation.
pub fn summary_message(summary: &str) -> Message {
    Message::system(format!("[A summary of the conversation so far: {}]", summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    #[test]
    fn summary_message_is_system_role() {
        let message = summary_message("user asked about Rust");
        assert_eq!(message.role, Role::System);
        assert_eq!(
            message.text,
            "[A summary of the conversation so far: user asked about Rust]"
        );
    }

    #[test]
    fn fallback_text_is_stable() {
        // Callers rely on this exact text when the backend is unavailable
        assert_eq!(SUMMARY_FALLBACK, "...previous context summarized...");
    }
}
