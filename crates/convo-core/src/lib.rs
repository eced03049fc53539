//! Conversation window management for LLM chat.
//!
//! Keeps a chat conversation within a model's context-length budget before
//! it is sent to a downstream generative API.
//!
//! # Key Components
//!
//! - [`message`]: The conversation message model (`Message`, `Role`)
//! - [`counter`]: Token counting via heuristic estimation (chars / 4)
//! - [`stats`]: Aggregate conversation statistics
//! - [`types`]: `TokenBudget`, `TruncationStrategy`, `TruncationResult`
//! - [`policy`]: Truncation policies (recent tail, pinned head/tail)
//! - [`summarizer`]: Summarization seam for condensed history
//! - [`advisory`]: Two-tier near-limit warnings
//! - [`limits`]: Per-model recommended limits registry

pub mod advisory;
pub mod counter;
pub mod limits;
pub mod message;
pub mod policy;
pub mod stats;
pub mod summarizer;
pub mod types;

pub use advisory::{advise, is_near_limit, LimitAdvisory};
pub use counter::{HeuristicTokenCounter, SharedTokenCounter, TokenCounter};
pub use limits::{ModelLimit, ModelLimitsRegistry};
pub use message::{Message, Role};
pub use policy::{condense_pinned, prepare_context, smart_truncate, truncate_tail};
pub use stats::{conversation_stats, ConversationStats};
pub use summarizer::{summary_message, SummarizeError, Summarizer, SUMMARY_FALLBACK};
pub use types::{TokenBudget, TruncationResult, TruncationStrategy};
