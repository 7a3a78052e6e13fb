use rustc_hash::FxHashMap;

use crate::models::{ScoredSentence, Sentence};
use crate::nlp::content_words;

/// Multiplier applied to the first sentence of a batch
pub const FIRST_SENTENCE_BOOST: f64 = 1.2;
/// Multiplier applied to the last sentence of a batch
pub const LAST_SENTENCE_BOOST: f64 = 1.1;

/// Normalized frequency of every content word in one scoring batch
///
/// The most frequent word maps to 1.0. Built once per batch and shared by
/// every sentence in it.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    frequencies: FxHashMap<String, f64>,
}

impl WordFrequencyTable {
    /// Count content words across all sentences and normalize by the maximum
    pub fn build(sentences: &[Sentence]) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for sentence in sentences {
            for word in content_words(&sentence.text) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let Some(&max_count) = counts.values().max() else {
            return Self::default();
        };

        let frequencies = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max_count as f64))
            .collect();

        Self { frequencies }
    }

    /// Normalized frequency of a word, 0.0 when absent
    pub fn frequency(&self, word: &str) -> f64 {
        self.frequencies.get(word).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Most frequent terms, ties broken alphabetically
    pub fn top_terms(&self, n: usize) -> Vec<(&str, f64)> {
        let mut terms: Vec<(&str, f64)> = self
            .frequencies
            .iter()
            .map(|(word, &freq)| (word.as_str(), freq))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(n);
        terms
    }
}

/// Score every sentence of a batch by mean normalized term frequency
///
/// Returns one `ScoredSentence` per input sentence, in input order. The
/// first sentence is boosted by `FIRST_SENTENCE_BOOST` and the last by
/// `LAST_SENTENCE_BOOST`; a lone sentence only gets the first boost.
pub fn score_sentences(sentences: &[Sentence]) -> Vec<ScoredSentence> {
    let table = WordFrequencyTable::build(sentences);
    let last = sentences.len().saturating_sub(1);

    sentences
        .iter()
        .enumerate()
        .map(|(position, sentence)| {
            let mut score = if table.is_empty() {
                0.0
            } else {
                mean_frequency(&table, &sentence.text)
            };

            if position == 0 {
                score *= FIRST_SENTENCE_BOOST;
            } else if position == last {
                score *= LAST_SENTENCE_BOOST;
            }

            ScoredSentence::new(sentence, score)
        })
        .collect()
}

fn mean_frequency(table: &WordFrequencyTable, text: &str) -> f64 {
    let words = content_words(text);
    if words.is_empty() {
        return 0.0;
    }
    let total: f64 = words.iter().map(|w| table.frequency(w)).sum();
    total / words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::split_sentences;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_frequency_table_normalizes_by_max() {
        let sentences = split_sentences("Budget review and budget approval happened.");
        let table = WordFrequencyTable::build(&sentences);

        assert!(approx_eq(table.frequency("budget"), 1.0));
        assert!(approx_eq(table.frequency("review"), 0.5));
        assert!(approx_eq(table.frequency("and"), 0.0));
        assert_eq!(table.top_terms(2), vec![("budget", 1.0), ("approval", 0.5)]);
    }

    #[test]
    fn test_single_sentence_gets_first_boost_only() {
        let sentences = split_sentences("Apples apples bananas.");
        let scored = score_sentences(&sentences);

        // (1.0 + 1.0 + 0.5) / 3 * 1.2
        assert_eq!(scored.len(), 1);
        assert!(approx_eq(scored[0].score, 1.0));
    }

    #[test]
    fn test_positional_boosts() {
        let sentences = split_sentences(
            "Server migration completed. Server migration completed. Server migration completed.",
        );
        let scored = score_sentences(&sentences);

        assert!(approx_eq(scored[0].score, 1.2));
        assert!(approx_eq(scored[1].score, 1.0));
        assert!(approx_eq(scored[2].score, 1.1));
    }

    #[test]
    fn test_no_content_words_scores_zero() {
        let sentences = split_sentences("It is what it is, and so on. We did it to them again.");
        let scored = score_sentences(&sentences);

        assert_eq!(scored.len(), 2);
        assert!(scored.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_sentence_without_content_words_scores_zero() {
        let sentences = split_sentences(
            "Release planning covers the release scope. It is what it is, and so on. Release dates follow.",
        );
        let scored = score_sentences(&sentences);

        assert_eq!(scored[1].score, 0.0);
        assert!(scored[0].score > 0.0);
        assert!(scored[2].score > 0.0);
    }

    #[test]
    fn test_preserves_indices_and_text() {
        let sentences = split_sentences("Alpha team reported progress. Beta team reported delays.");
        let scored = score_sentences(&sentences);

        for (sentence, scored) in sentences.iter().zip(&scored) {
            assert_eq!(sentence.index, scored.index);
            assert_eq!(sentence.text, scored.text);
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(score_sentences(&[]).is_empty());
        assert!(WordFrequencyTable::build(&[]).is_empty());
    }
}
