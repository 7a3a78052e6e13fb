pub mod error;
pub mod extract;
pub mod io;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod scoring;

pub use error::SummarizeError;
pub use extract::{
    extract_action_items, extract_action_items_tagged, extract_key_points, ActionItem, ActionKind,
};
pub use io::{parse_transcript, read_transcript_file, HumanSummary, SummaryReport, TranscriptDocument};
pub use models::{Sentence, ScoredSentence, Strategy, SummaryResult, TranscriptStats};
pub use nlp::split_sentences;
pub use pipeline::{
    extract_summary, summarize, SummarizerConfig, Summarizer, SummaryOutcome,
    DEFAULT_SENTENCE_COUNT, MAX_SENTENCE_COUNT,
};
pub use scoring::{score_sentences, select_summary, select_top, WordFrequencyTable};
