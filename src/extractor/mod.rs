// src/extractor/mod.rs
// ActionItemExtractor trait and error taxonomy for the two extraction backends

use async_trait::async_trait;

pub mod claude;
pub mod langflow;

pub use claude::ClaudeExtractor;
pub use langflow::LangflowExtractor;

/// Error types for action-item extraction
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Extraction request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Extraction endpoint returned {status}: {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed extraction response: {0}")]
    MalformedResponse(String),
}

/// Capability for turning merged transcript context into raw action-item text.
///
/// Both backends return the model's text verbatim; line splitting and
/// deduplication happen in the transcript window.
#[async_trait]
pub trait ActionItemExtractor: Send + Sync {
    /// Backend name for logging/debugging
    fn name(&self) -> &'static str;

    /// One extraction attempt over the merged context. No retries.
    async fn extract(&self, context: &str) -> Result<String, ExtractionError>;
}
