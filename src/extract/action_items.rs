use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::nlp::split_sentences;

use super::{strip_trailing_period, MIN_STATEMENT_CHARS};

/// The lexical rule that classified a sentence as an action item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ExplicitItem,
    NeedTo,
    Should,
    Will,
    Must,
    Todo,
    FollowUp,
    Deadline,
    DueDate,
    Assignment,
    Scheduling,
    MakeSure,
}

/// One entry of the ordered rule list
#[derive(Debug)]
pub struct ActionPattern {
    pub kind: ActionKind,
    pub regex: Regex,
}

/// Rules in priority order; the first match classifies a sentence
const PATTERN_SOURCES: &[(ActionKind, &str)] = &[
    (ActionKind::ExplicitItem, r"\baction items?\b"),
    (ActionKind::NeedTo, r"\bneeds? to\b"),
    (ActionKind::Should, r"\bshould\b"),
    (ActionKind::Will, r"\bwill\b"),
    (ActionKind::Must, r"\bmust\b"),
    (ActionKind::Todo, r"\b(?:todo|to[\s-]?do)\b"),
    (ActionKind::FollowUp, r"\bfollow[\s-]?up\b"),
    (ActionKind::Deadline, r"\bdeadline\b"),
    (
        ActionKind::DueDate,
        r"\bby (?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|tomorrow|next week|end of)\b",
    ),
    (ActionKind::Assignment, r"\bassign(?:ed)?\b"),
    (ActionKind::Scheduling, r"\bschedule\b"),
    (ActionKind::MakeSure, r"\bmake sure\b"),
];

/// The compiled, ordered action patterns
pub fn action_patterns() -> &'static [ActionPattern] {
    static PATTERNS: OnceLock<Vec<ActionPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        PATTERN_SOURCES
            .iter()
            .map(|&(kind, source)| ActionPattern {
                kind,
                regex: Regex::new(&format!("(?i){source}"))
                    .expect("action patterns are valid regexes"),
            })
            .collect()
    })
}

/// Classify a sentence by the first pattern that matches it
pub fn classify_action(sentence: &str) -> Option<ActionKind> {
    action_patterns()
        .iter()
        .find(|pattern| pattern.regex.is_match(sentence))
        .map(|pattern| pattern.kind)
}

/// An extracted action statement with the rule that found it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    pub text: String,
    pub kind: ActionKind,
}

/// Extract distinct action items along with their classifying rule
///
/// Each sentence contributes at most one item. Duplicates are detected
/// case-insensitively and the first occurrence wins. Candidates of
/// `MIN_STATEMENT_CHARS` characters or fewer are skipped and do not count
/// as seen.
pub fn extract_action_items_tagged(text: &str) -> Vec<ActionItem> {
    let mut items = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for sentence in split_sentences(text) {
        let Some(kind) = classify_action(&sentence.text) else {
            continue;
        };

        let candidate = strip_trailing_period(&sentence.text);
        if candidate.chars().count() <= MIN_STATEMENT_CHARS {
            continue;
        }
        if seen.insert(candidate.to_lowercase()) {
            items.push(ActionItem {
                text: candidate.to_string(),
                kind,
            });
        }
    }

    items
}

/// Extract distinct action statements in order of first appearance
pub fn extract_action_items(text: &str) -> Vec<String> {
    extract_action_items_tagged(text)
        .into_iter()
        .map(|item| item.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_need_to_and_period_stripped() {
        let items = extract_action_items(
            "We need to finish the report by Friday. The weather is nice today.",
        );
        assert_eq!(items, vec!["We need to finish the report by Friday"]);
    }

    #[test]
    fn test_explicit_action_item_prefix() {
        let items = extract_action_items_tagged(
            "Action item: Review the pull request before merging. Also great weather today.",
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ActionKind::ExplicitItem);
        assert_eq!(items[0].text, "Action item: Review the pull request before merging");
    }

    #[test]
    fn test_pattern_priority_first_match_wins() {
        assert_eq!(
            classify_action("You must review it and you should sign off"),
            Some(ActionKind::Should)
        );
        assert_eq!(
            classify_action("We need to schedule a follow-up meeting for Monday"),
            Some(ActionKind::NeedTo)
        );

        let items = extract_action_items_tagged("The team must and should fix the login bug.");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ActionKind::Should);
    }

    #[test]
    fn test_each_rule_matches() {
        let cases = [
            ("Please add the action items to the tracker", ActionKind::ExplicitItem),
            ("Marketing needs to approve the copy", ActionKind::NeedTo),
            ("Priya will draft the proposal", ActionKind::Will),
            ("The contract must be signed first", ActionKind::Must),
            ("Add a to-do for the billing cleanup", ActionKind::Todo),
            ("Send a follow up email to the vendor", ActionKind::FollowUp),
            ("The deadline for submissions moved", ActionKind::Deadline),
            ("Finish the slides by tomorrow please", ActionKind::DueDate),
            ("Ticket was assigned to Omar", ActionKind::Assignment),
            ("Let us schedule the retro", ActionKind::Scheduling),
            ("Make sure the backups run nightly", ActionKind::MakeSure),
        ];
        for (sentence, expected) in cases {
            assert_eq!(classify_action(sentence), Some(expected), "{sentence}");
        }
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(classify_action("The willow tree looked lovely"), None);
        assert_eq!(classify_action("Mustard was served at lunch"), None);
        assert_eq!(classify_action("The reassignment was reverted"), None);
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first() {
        let items = extract_action_items(
            "We need to update the release notes. WE NEED TO UPDATE THE RELEASE NOTES. We should hire.",
        );
        assert_eq!(items, vec!["We need to update the release notes"]);
    }

    #[test]
    fn test_short_candidates_skipped() {
        let items = extract_action_items("We will do it. We will do it by the weekend.");
        assert_eq!(items, vec!["We will do it by the weekend"]);
    }

    #[test]
    fn test_no_action_items() {
        let items = extract_action_items("The sun rose in the east. Birds were singing in the trees.");
        assert!(items.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_action_items("").is_empty());
        assert!(extract_action_items("  \n ").is_empty());
    }

    #[test]
    fn test_patterns_are_ordered() {
        let kinds: Vec<ActionKind> = action_patterns().iter().map(|p| p.kind).collect();
        assert_eq!(kinds.first(), Some(&ActionKind::ExplicitItem));
        assert_eq!(kinds.last(), Some(&ActionKind::MakeSure));
        assert_eq!(kinds.len(), 12);
    }
}
