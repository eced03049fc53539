//! Gemini-backed summarization provider.
//!
//! Implements the [`convo_core::Summarizer`] seam over the Google
//! generative-language HTTP API. A single best-effort request per call; no
//! retry or backoff. Callers in `convo-core` absorb failures into a fixed
//! fallback string, so errors surfaced here never reach a chat user.

pub mod error;
pub mod gemini;
pub mod protocol;

pub use error::LLMError;
pub use gemini::GeminiSummarizer;
