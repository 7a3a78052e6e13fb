use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of leading words used for an auto-generated title
const TITLE_WORDS: usize = 8;

/// The engine's sole output artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Extractive summary: selected sentences in reading order
    pub summary: String,
    /// Free-standing key statements in reading order
    pub key_points: Vec<String>,
    /// Distinct action statements in order of first appearance
    pub action_items: Vec<String>,
}

impl SummaryResult {
    /// The result for empty or whitespace-only input
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Which summarization path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Single scoring pass over the whole transcript
    Direct,
    /// Per-segment summaries re-summarized as one block
    MapReduce,
}

/// Basic counts describing a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptStats {
    /// Whitespace-separated word count of the raw text
    pub word_count: usize,
    /// Sentences that survived splitting
    pub sentence_count: usize,
}

impl TranscriptStats {
    pub fn from_text(text: &str) -> Self {
        Self::with_sentence_count(text, crate::nlp::split_sentences(text).len())
    }

    /// Stats for text whose sentences were already split elsewhere
    pub fn with_sentence_count(text: &str, sentence_count: usize) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            sentence_count,
        }
    }
}

/// Build a short title from the opening words of a transcript
///
/// Falls back to a timestamped session name when the transcript is empty.
pub fn derive_title(text: &str, now: DateTime<Utc>) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return format!("Session {}", now.format("%Y-%m-%d %H:%M"));
    }

    let mut title = words[..words.len().min(TITLE_WORDS)].join(" ");
    if words.len() > TITLE_WORDS {
        title.push_str("...");
    }
    title
}
