use std::cmp::Ordering;

use crate::models::{join_sentences, ScoredSentence};

/// Pick the top `n` sentences and return them in reading order
///
/// Ranking is by score descending with ties going to the earlier sentence.
/// When there are `n` or fewer sentences, all of them are returned
/// unchanged.
pub fn select_top(scored: &[ScoredSentence], n: usize) -> Vec<ScoredSentence> {
    let mut selected = scored.to_vec();
    if scored.len() > n {
        selected.sort_by(rank_order);
        selected.truncate(n);
    }
    selected.sort_by_key(|s| s.index);
    selected
}

/// Select the top `n` sentences and join them into one summary string
pub fn select_summary(scored: &[ScoredSentence], n: usize) -> String {
    let selected = select_top(scored, n);
    join_sentences(selected.iter().map(|s| s.text.as_str()))
}

fn rank_order(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}
