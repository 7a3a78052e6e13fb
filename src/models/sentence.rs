use serde::{Deserialize, Serialize};

/// A sentence that survived splitting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Dense position among the surviving sentences (0-based)
    pub index: usize,
    /// Trimmed sentence text, never modified downstream
    pub text: String,
}

impl Sentence {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// A sentence with its importance score for one scoring pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    /// Normalized term-frequency score, always >= 0
    pub score: f64,
    /// Same index as the source `Sentence`
    pub index: usize,
    /// Sentence text
    pub text: String,
}

impl ScoredSentence {
    pub fn new(sentence: &Sentence, score: f64) -> Self {
        Self {
            score,
            index: sentence.index,
            text: sentence.text.clone(),
        }
    }
}

/// Join sentence texts with single spaces
pub fn join_sentences<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    texts.into_iter().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_sentences() {
        assert_eq!(join_sentences(["First one.", "Second one."]), "First one. Second one.");
        assert_eq!(join_sentences(Vec::<&str>::new()), "");
    }
}
