// tests/transcript_window.rs
//
// End-to-end behavior of the transcript window against a scripted extractor:
// rolling history, deduplication, and the failure-swallowing contract.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use tally::extractor::{ActionItemExtractor, ExtractionError};
use tally::window::{HISTORY_CAPACITY, TranscriptWindow};

/// Plays back queued responses in order and records every context it was
/// asked to extract from. An exhausted script returns empty text.
struct ScriptedExtractor {
    responses: Mutex<VecDeque<Result<String, ExtractionError>>>,
    contexts: Mutex<Vec<String>>,
}

impl ScriptedExtractor {
    fn new(responses: Vec<Result<String, ExtractionError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            contexts: Mutex::new(Vec::new()),
        })
    }

    fn contexts(&self) -> Vec<String> {
        self.contexts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActionItemExtractor for ScriptedExtractor {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn extract(&self, context: &str) -> Result<String, ExtractionError> {
        self.contexts.lock().unwrap().push(context.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

fn server_error() -> ExtractionError {
    ExtractionError::BadStatus {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        body: "internal error".to_string(),
    }
}

#[tokio::test]
async fn new_items_are_returned_and_recorded() {
    let extractor = ScriptedExtractor::new(vec![Ok(
        "- Alice to send notes\n- Bob to follow up\n".to_string()
    )]);
    let mut window = TranscriptWindow::new(extractor);

    let new_items = window.submit_chunk("Alice will send the notes.").await;

    assert_eq!(new_items, vec!["- Alice to send notes", "- Bob to follow up"]);
    assert_eq!(
        window.action_items(),
        ["- Alice to send notes", "- Bob to follow up"]
    );
}

#[tokio::test]
async fn already_known_items_yield_an_empty_round() {
    let extractor = ScriptedExtractor::new(vec![
        Ok("- Alice to send notes\n- Bob to follow up\n".to_string()),
        Ok("- Alice to send notes\n- Bob to follow up\n".to_string()),
    ]);
    let mut window = TranscriptWindow::new(extractor);

    window.submit_chunk("first chunk").await;
    let second = window.submit_chunk("second chunk").await;

    assert!(second.is_empty());
    assert_eq!(window.action_items().len(), 2);
}

#[tokio::test]
async fn extraction_failure_is_swallowed() {
    let extractor = ScriptedExtractor::new(vec![
        Ok("- prepare agenda".to_string()),
        Err(server_error()),
        Ok("- prepare agenda\n- book room".to_string()),
    ]);
    let mut window = TranscriptWindow::new(extractor);

    window.submit_chunk("one").await;
    let failed_round = window.submit_chunk("two").await;

    assert!(failed_round.is_empty());
    assert_eq!(window.action_items(), ["- prepare agenda"]);

    // The session keeps going after a failed round.
    let recovered = window.submit_chunk("three").await;
    assert_eq!(recovered, vec!["- book room"]);
}

#[tokio::test]
async fn history_holds_only_the_last_ten_chunks() {
    let extractor = ScriptedExtractor::new(vec![]);
    let mut window = TranscriptWindow::new(extractor);

    for i in 1..=11 {
        window.submit_chunk(&format!("chunk-{i}")).await;
        assert!(window.history().count() <= HISTORY_CAPACITY);
    }

    let expected: Vec<String> = (2..=11).map(|i| format!("chunk-{i}")).collect();
    let history: Vec<&str> = window.history().collect();
    assert_eq!(history, expected);
}

#[tokio::test]
async fn merged_context_is_space_joined_in_order() {
    let extractor = ScriptedExtractor::new(vec![]);
    let mut window = TranscriptWindow::new(extractor.clone());

    window.submit_chunk("we should").await;
    window.submit_chunk("ship on").await;
    window.submit_chunk("friday").await;

    assert_eq!(
        extractor.contexts(),
        ["we should", "we should ship on", "we should ship on friday"]
    );
}

#[tokio::test]
async fn context_rolls_past_evicted_chunks() {
    let extractor = ScriptedExtractor::new(vec![]);
    let mut window = TranscriptWindow::new(extractor.clone());

    for i in 1..=11 {
        window.submit_chunk(&format!("c{i}")).await;
    }

    let last = extractor.contexts().last().cloned().unwrap();
    assert_eq!(last, "c2 c3 c4 c5 c6 c7 c8 c9 c10 c11");
}

#[tokio::test]
async fn candidate_lines_are_trimmed_and_blanks_dropped() {
    let extractor =
        ScriptedExtractor::new(vec![Ok("  - send notes \n\n\t- book room\n  \n".to_string())]);
    let mut window = TranscriptWindow::new(extractor);

    let new_items = window.submit_chunk("chunk").await;

    assert_eq!(new_items, vec!["- send notes", "- book room"]);
}

#[tokio::test]
async fn items_keep_first_seen_order_across_rounds() {
    let extractor = ScriptedExtractor::new(vec![
        Ok("- b\n- a".to_string()),
        Ok("- c\n- a\n- b".to_string()),
    ]);
    let mut window = TranscriptWindow::new(extractor);

    window.submit_chunk("one").await;
    let second = window.submit_chunk("two").await;

    assert_eq!(second, vec!["- c"]);
    assert_eq!(window.action_items(), ["- b", "- a", "- c"]);
}

#[tokio::test]
async fn empty_chunks_are_accepted() {
    let extractor = ScriptedExtractor::new(vec![]);
    let mut window = TranscriptWindow::new(extractor.clone());

    window.submit_chunk("before").await;
    window.submit_chunk("").await;

    assert_eq!(window.history().count(), 2);
    assert_eq!(extractor.contexts().last().unwrap(), "before ");
}
