// src/extractor/claude.rs
// Direct Anthropic Messages API extraction (deterministic, temperature 0)

use super::{ActionItemExtractor, ExtractionError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct ClaudeExtractor {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: usize,
}

impl ClaudeExtractor {
    pub fn new(
        api_key: String,
        model: String,
        max_tokens: usize,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model,
            max_tokens,
        })
    }

    fn request_body(&self, context: &str) -> Value {
        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": 0,
            "messages": [{
                "role": "user",
                "content": render_prompt(context),
            }],
        })
    }
}

fn render_prompt(context: &str) -> String {
    format!(
        "From the following meeting transcript snippet, extract all explicit or implicit action items.\n\
         Be concise. List each item as a bullet point. Include assignees if mentioned.\n\n\
         Transcript:\n{context}\n\nAction Items:\n"
    )
}

fn parse_response(raw: &Value) -> Result<String, ExtractionError> {
    raw["content"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            ExtractionError::MalformedResponse("no content text in Claude response".to_string())
        })
}

#[async_trait]
impl ActionItemExtractor for ClaudeExtractor {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn extract(&self, context: &str) -> Result<String, ExtractionError> {
        let body = self.request_body(context);

        debug!("Claude request: model={}", self.model);

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(ExtractionError::BadStatus { status, body });
        }

        let raw = response.json::<Value>().await?;
        parse_response(&raw)
    }
}
