use crate::models::Sentence;

/// Fragments at or below this many characters are not sentences
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Split raw text into sentences
///
/// A boundary follows `.`, `!` or `?` when the next character is whitespace
/// (or the text ends). Fragments are trimmed, fragments of
/// `MIN_SENTENCE_CHARS` characters or fewer are dropped, and the survivors
/// are re-indexed from 0.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    split_fragments(text)
        .into_iter()
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > MIN_SENTENCE_CHARS)
        .enumerate()
        .map(|(index, fragment)| Sentence::new(index, fragment))
        .collect()
}

/// Raw fragments between boundaries, untrimmed and unfiltered
fn split_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let Some(&(boundary, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }

        fragments.push(&text[start..boundary]);

        // Swallow the whole whitespace run
        while chars.peek().is_some_and(|&(_, w)| w.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |&(i, _)| i);
    }

    if start < text.len() {
        fragments.push(&text[start..]);
    }

    fragments
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
