use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::SummarizeError;
use crate::extract::{extract_action_items, extract_key_points};
use crate::models::{join_sentences, Sentence, Strategy, SummaryResult};
use crate::nlp::split_sentences;
use crate::scoring::{score_sentences, select_summary};

use super::SummarizerConfig;

/// A summary together with how it was produced
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    /// The summary, key points and action items
    pub result: SummaryResult,
    /// Which path produced the summary
    pub strategy: Strategy,
    /// Sentences that survived splitting the input
    pub sentence_count: usize,
    /// Number of map segments (0 on the direct path)
    pub segment_count: usize,
}

/// Summarization pipeline: split, score, select and extract
///
/// Stateless apart from its configuration, so one instance can serve any
/// number of transcripts concurrently.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom config, rejecting invalid values
    pub fn with_config(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Path a transcript with this many sentences would take
    pub fn strategy_for(&self, sentence_count: usize) -> Strategy {
        if sentence_count > self.config.long_transcript_threshold {
            Strategy::MapReduce
        } else {
            Strategy::Direct
        }
    }

    /// Summarize a transcript into summary, key points and action items
    pub fn summarize(
        &self,
        text: &str,
        target_sentence_count: usize,
    ) -> Result<SummaryResult, SummarizeError> {
        self.run(text, target_sentence_count).map(|outcome| outcome.result)
    }

    /// Summarize a transcript and report which strategy was used
    ///
    /// Transcripts above `long_transcript_threshold` sentences are split into
    /// segments that are summarized independently (map), then the joined
    /// segment summaries are summarized again (reduce). Action items always
    /// come from the full original text.
    pub fn run(
        &self,
        text: &str,
        target_sentence_count: usize,
    ) -> Result<SummaryOutcome, SummarizeError> {
        if target_sentence_count == 0 {
            return Err(SummarizeError::InvalidSentenceCount(target_sentence_count));
        }

        if text.trim().is_empty() {
            return Ok(SummaryOutcome {
                result: SummaryResult::empty(),
                strategy: Strategy::Direct,
                sentence_count: 0,
                segment_count: 0,
            });
        }

        let sentences = split_sentences(text);
        let sentence_count = sentences.len();

        match self.strategy_for(sentence_count) {
            Strategy::Direct => {
                debug!("Direct summarization of {} sentences", sentence_count);
                let result = SummaryResult {
                    summary: summarize_sentences(&sentences, target_sentence_count),
                    key_points: extract_key_points(text, self.config.max_key_points),
                    action_items: extract_action_items(text),
                };
                Ok(SummaryOutcome {
                    result,
                    strategy: Strategy::Direct,
                    sentence_count,
                    segment_count: 0,
                })
            }
            Strategy::MapReduce => {
                info!(
                    "Long transcript ({} sentences), using map-reduce",
                    sentence_count
                );
                let segment_summaries = self.map_segments(&sentences);
                let segment_count = segment_summaries.len();
                debug!("Map step produced {} segment summaries", segment_count);

                let combined = join_sentences(segment_summaries.iter().map(String::as_str));
                let result = SummaryResult {
                    summary: extract_summary(&combined, target_sentence_count),
                    key_points: extract_key_points(&combined, self.config.max_key_points),
                    action_items: extract_action_items(text),
                };
                Ok(SummaryOutcome {
                    result,
                    strategy: Strategy::MapReduce,
                    sentence_count,
                    segment_count,
                })
            }
        }
    }

    /// Summarize each contiguous segment, keeping segment order
    fn map_segments(&self, sentences: &[Sentence]) -> Vec<String> {
        let size = self.config.segment_size;
        let target = self.config.segment_sentence_count;

        if self.config.parallel_segments {
            sentences
                .par_chunks(size)
                .map(|segment| summarize_segment(segment, target))
                .collect()
        } else {
            sentences
                .chunks(size)
                .map(|segment| summarize_segment(segment, target))
                .collect()
        }
    }
}

fn summarize_segment(segment: &[Sentence], target: usize) -> String {
    let block = join_sentences(segment.iter().map(|s| s.text.as_str()));
    extract_summary(&block, target)
}

fn summarize_sentences(sentences: &[Sentence], target: usize) -> String {
    if sentences.is_empty() {
        return String::new();
    }
    select_summary(&score_sentences(sentences), target)
}

/// Single-pass extractive summary of `target` sentences
///
/// Text with `target` or fewer sentences comes back as its sentences
/// rejoined in order.
pub fn extract_summary(text: &str, target: usize) -> String {
    summarize_sentences(&split_sentences(text), target)
}

/// Summarize with the default configuration
pub fn summarize(text: &str, target_sentence_count: usize) -> Result<SummaryResult, SummarizeError> {
    Summarizer::default().summarize(text, target_sentence_count)
}
