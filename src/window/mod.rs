// src/window/mod.rs
// Rolling transcript window and the running action-item list

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{error, info};

use crate::extractor::ActionItemExtractor;

/// Chunks of short-range context kept for each extraction call.
pub const HISTORY_CAPACITY: usize = 10;

/// Stateful accumulator for one meeting session.
///
/// Holds the last [`HISTORY_CAPACITY`] transcript chunks and every unique
/// action item discovered so far. Not designed for concurrent access; callers
/// feed chunks one at a time.
pub struct TranscriptWindow {
    history: VecDeque<String>,
    action_items: Vec<String>,
    extractor: Arc<dyn ActionItemExtractor>,
}

impl TranscriptWindow {
    pub fn new(extractor: Arc<dyn ActionItemExtractor>) -> Self {
        Self {
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
            action_items: Vec::new(),
            extractor,
        }
    }

    /// Feed one transcript chunk and return the action items first seen on
    /// this call, in extraction order.
    ///
    /// The chunk joins the rolling window (evicting the oldest entry once the
    /// window is full) and the merged window is sent out for extraction.
    /// Extraction failures are logged and downgraded to an empty round; they
    /// never reach the caller.
    pub async fn submit_chunk(&mut self, chunk: &str) -> Vec<String> {
        info!("New transcript chunk received: {}", chunk.trim());

        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(chunk.to_string());

        let merged = self.merged_context();

        let raw = match self.extractor.extract(&merged).await {
            Ok(text) => text,
            Err(e) => {
                error!("{} extraction failed: {}", self.extractor.name(), e);
                return Vec::new();
            }
        };

        let mut new_items = Vec::new();
        for line in raw.split('\n') {
            let item = line.trim();
            if item.is_empty() {
                continue;
            }
            if self.action_items.iter().any(|known| known == item) {
                continue;
            }
            info!("New action item: {}", item);
            self.action_items.push(item.to_string());
            new_items.push(item.to_string());
        }

        new_items
    }

    /// Chunks currently in the window, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Every unique action item discovered so far, in first-seen order.
    pub fn action_items(&self) -> &[String] {
        &self.action_items
    }

    fn merged_context(&self) -> String {
        self.history
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
