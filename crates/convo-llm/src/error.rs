use convo_core::SummarizeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Empty response from model")]
    EmptyResponse,
}

impl From<LLMError> for SummarizeError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::EmptyResponse => SummarizeError::EmptyResponse,
            other => SummarizeError::Backend(other.to_string()),
        }
    }
}
