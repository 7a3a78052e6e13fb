use std::sync::OnceLock;

use regex::Regex;

use super::is_stopword;

/// Words must be longer than this to carry topical signal
pub const MIN_WORD_CHARS: usize = 2;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b[a-z]+\b").expect("word pattern is valid"))
}

/// All lowercase alphabetic words in the text
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Words that count toward term frequency: no stop words, no short words
pub fn content_words(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .filter(|word| word.len() > MIN_WORD_CHARS && !is_stopword(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_lowercases_and_drops_digits() {
        assert_eq!(
            words("The Q4 Roadmap, v2!"),
            vec!["the", "roadmap"]
        );
    }

    #[test]
    fn test_words_split_contractions() {
        assert_eq!(words("Don't stop"), vec!["don", "t", "stop"]);
    }

    #[test]
    fn test_content_words_filter() {
        assert_eq!(
            content_words("We need to ship the API docs by Friday."),
            vec!["need", "ship", "api", "docs", "friday"]
        );
    }

    #[test]
    fn test_content_words_without_letters() {
        assert!(content_words("42 + 17 = 59").is_empty());
    }
}
