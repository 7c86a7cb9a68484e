// src/extractor/langflow.rs
// Remote flow extraction: one POST to a configured Langflow chat endpoint

use super::{ActionItemExtractor, ExtractionError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Wire shape expected by the flow endpoint. Field names are part of the
/// contract and must serialize exactly as written.
#[derive(Debug, Serialize)]
struct FlowRequest<'a> {
    input_value: &'a str,
    output_type: &'a str,
    input_type: &'a str,
}

impl<'a> FlowRequest<'a> {
    fn chat(input_value: &'a str) -> Self {
        Self {
            input_value,
            output_type: "chat",
            input_type: "chat",
        }
    }
}

pub struct LangflowExtractor {
    client: Client,
    url: String,
}

impl LangflowExtractor {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

/// Langflow nests the chat output several levels deep; older flows return a
/// flat `result` string instead.
fn parse_response(raw: &Value) -> Result<String, ExtractionError> {
    if let Some(text) = raw
        .pointer("/outputs/0/outputs/0/results/message/text")
        .and_then(Value::as_str)
    {
        return Ok(text.to_string());
    }
    if let Some(text) = raw.get("result").and_then(Value::as_str) {
        return Ok(text.to_string());
    }
    Err(ExtractionError::MalformedResponse(
        "no chat message text in flow response".to_string(),
    ))
}

#[async_trait]
impl ActionItemExtractor for LangflowExtractor {
    fn name(&self) -> &'static str {
        "langflow"
    }

    async fn extract(&self, context: &str) -> Result<String, ExtractionError> {
        debug!("Langflow request: url={}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&FlowRequest::chat(context))
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
