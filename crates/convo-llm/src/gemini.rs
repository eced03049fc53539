//! Gemini-backed history summarizer.

use async_trait::async_trait;
use convo_core::{Message, SummarizeError, Summarizer};
use reqwest::Client;

use crate::error::LLMError;
use crate::protocol::{GeminiRequest, GeminiResponse, GenerationConfig};

/// Default model for summarization; fast and cheap is the point.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
/// Low randomness keeps summaries stable across calls.
const SUMMARY_TEMPERATURE: f64 = 0.1;

/// Fixed instruction wrapped around the conversation excerpt.
const SUMMARY_INSTRUCTION: &str = "You are a history summarizer. Briefly summarize the key points of the following conversation excerpt. Focus on user requests, important facts, and decisions made. The summary will be used as context for an ongoing chat, so it must be concise and informative.";

/// Google Gemini summarization provider.
pub struct GeminiSummarizer {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiSummarizer {
    /// Create a new summarizer with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name (e.g., "gemini-1.5-flash", "gemini-1.5-pro").
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the summarization prompt for a conversation excerpt.
    fn build_prompt(messages: &[Message]) -> String {
        let history_text = messages
            .iter()
            .map(|m| format!("{}: {}", m.role, m.text))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\nCONVERSATION EXCERPT:\n{}\n\nCONCISE SUMMARY:",
            SUMMARY_INSTRUCTION, history_text
        )
    }

    /// Issue a single non-streaming generation request.
    async fn generate(&self, prompt: String) -> Result<String, LLMError> {
        let request = GeminiRequest::prompt(
            prompt,
            GenerationConfig {
                temperature: Some(SUMMARY_TEMPERATURE),
                max_output_tokens: None,
            },
        );

        // Query-param authentication, same as the streaming endpoint
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        log::debug!("Gemini summarization request using model '{}'", self.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(LLMError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.map_err(LLMError::Http)?;

            if status == 401 || status == 403 {
                return Err(LLMError::Auth(format!(
                    "Gemini authentication failed: {}. Please check your API key.",
                    text
                )));
            }

            return Err(LLMError::Api(format!(
                "Gemini API error: HTTP {}: {}",
                status, text
            )));
        }

        let body: GeminiResponse = response.json().await.map_err(LLMError::Http)?;
        let text = body.first_text().ok_or(LLMError::EmptyResponse)?;
        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, messages: &[Message]) -> Result<String, SummarizeError> {
        let prompt = Self::build_prompt(messages);
        match self.generate(prompt).await {
            Ok(text) => Ok(text),
            Err(err) => {
                log::warn!("Error summarizing chat history: {}", err);
                Err(err.into())
            }
        }
    }
}
