use crate::nlp::split_sentences;
use crate::scoring::{score_sentences, select_top};

use super::{strip_trailing_period, MIN_STATEMENT_CHARS};

/// Default number of key points requested
pub const DEFAULT_MAX_KEY_POINTS: usize = 7;

/// Extract up to `max_points` key statements in reading order
///
/// Uses the same scoring and ranking as the summary. A trailing period is
/// stripped from each point and points of `MIN_STATEMENT_CHARS` characters
/// or fewer are dropped, so the result may be shorter than `max_points`.
pub fn extract_key_points(text: &str, max_points: usize) -> Vec<String> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Vec::new();
    }

    let scored = score_sentences(&sentences);
    select_top(&scored, max_points)
        .iter()
        .map(|s| strip_trailing_period(&s.text))
        .filter(|point| point.chars().count() > MIN_STATEMENT_CHARS)
        .map(str::to_string)
        .collect()
}
