// src/main.rs

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use tally::config::{Config, ExtractorKind};
use tally::extractor::{ActionItemExtractor, ClaudeExtractor, LangflowExtractor};
use tally::window::TranscriptWindow;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env();

    let extractor: Arc<dyn ActionItemExtractor> = match config.extractor {
        ExtractorKind::Claude => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is not set")?;
            Arc::new(ClaudeExtractor::new(
                api_key,
                config.model.clone(),
                config.max_tokens,
                config.request_timeout(),
            )?)
        }
        ExtractorKind::Langflow => {
            let url = config
                .langflow_api_url
                .clone()
                .context("LANGFLOW_API_URL is not set")?;
            Arc::new(LangflowExtractor::new(url, config.request_timeout())?)
        }
    };

    info!("Starting tally ({} extractor)", extractor.name());

    // One window per session; chunks arrive line-by-line on stdin.
    let mut window = TranscriptWindow::new(extractor);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(chunk) = lines.next_line().await? {
        window.submit_chunk(&chunk).await;
    }

    info!(
        "Transcript finished: {} action items",
        window.action_items().len()
    );
    for item in window.action_items() {
        println!("{item}");
    }

    Ok(())
}
