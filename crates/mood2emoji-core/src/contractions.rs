//! Contraction expansion: `didn't` -> `did not` before any scoring happens.
//!
//! Matching is case-insensitive and whole-word; the expansion is inserted in
//! lowercase exactly as written in [`CONTRACTIONS`]. The rest of the sentence
//! keeps its original casing.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Contracted form -> expansion. Keys are lowercase and use the ASCII apostrophe.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "is not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("i'm", "i am"),
    ("isn't", "is not"),
    ("let's", "let us"),
    ("mightn't", "might not"),
    ("mustn't", "must not"),
    ("shan't", "shall not"),
    ("shouldn't", "should not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("you're", "you are"),
    ("i've", "i have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("who's", "who is"),
    ("what's", "what is"),
    ("where's", "where is"),
    ("there's", "there is"),
    ("that's", "that is"),
    ("could've", "could have"),
    ("would've", "would have"),
    ("should've", "should have"),
    ("can't've", "cannot have"),
    ("y'all", "you all"),
];

/// Typographic apostrophe produced by phone keyboards and word processors.
const CURLY_APOSTROPHE: char = '\u{2019}';

static DEFAULT_EXPANDER: Lazy<ContractionExpander> = Lazy::new(ContractionExpander::new);

/// Expand contractions with the built-in table.
pub fn expand_contractions(text: &str) -> String {
    DEFAULT_EXPANDER.expand(text)
}

/// Precompiled contraction matcher over [`CONTRACTIONS`].
#[derive(Debug, Clone)]
pub struct ContractionExpander {
    table: HashMap<&'static str, &'static str>,
    pattern: Regex,
}

impl Default for ContractionExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractionExpander {
    pub fn new() -> Self {
        let table: HashMap<&'static str, &'static str> = CONTRACTIONS.iter().copied().collect();

        // Longest keys first so "can't've" is not cut short by "can't".
        let mut keys: Vec<&str> = CONTRACTIONS.iter().map(|(k, _)| *k).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|k| regex::escape(k).replace('\'', "['\u{2019}]"))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
            .expect("contraction table compiles to a valid regex");

        Self { table, pattern }
    }

    /// Replace every known contraction in `text`. Unmatched text passes through unchanged.
    pub fn expand(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let key = caps[0].to_lowercase().replace(CURLY_APOSTROPHE, "'");
                match self.table.get(key.as_str()) {
                    Some(expanded) => (*expanded).to_string(),
                    None => key,
                }
            })
            .into_owned()
    }

    /// True if `text` still contains a known contraction.
    pub fn has_contraction(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_forty_entries_with_unique_keys() {
        assert_eq!(CONTRACTIONS.len(), 40);
        let expander = ContractionExpander::new();
        assert_eq!(expander.table.len(), CONTRACTIONS.len());
    }

    #[test]
    fn table_matches_classroom_tool() {
        let expected = "ain't=is not|aren't=are not|can't=cannot|couldn't=could not|\
            didn't=did not|doesn't=does not|don't=do not|hadn't=had not|\
            hasn't=has not|haven't=have not|he's=he is|she's=she is|\
            it's=it is|i'm=i am|isn't=is not|let's=let us|\
            mightn't=might not|mustn't=must not|shan't=shall not|\
            shouldn't=should not|wasn't=was not|weren't=were not|\
            won't=will not|wouldn't=would not|we're=we are|\
            they're=they are|you're=you are|i've=i have|we've=we have|\
            they've=they have|who's=who is|what's=what is|\
            where's=where is|there's=there is|that's=that is|\
            could've=could have|would've=would have|should've=should have|\
            can't've=cannot have|y'all=you all";
        let expected: Vec<(&str, &str)> = expected
            .split('|')
            .map(|pair| pair.split_once('=').unwrap())
            .collect();
        assert_eq!(CONTRACTIONS, expected.as_slice());
    }

    #[test]
    fn expands_simple_contraction() {
        assert_eq!(expand_contractions("I didn't enjoy the game"), "I did not enjoy the game");
    }

    #[test]
    fn expansion_is_lowercase_and_rest_keeps_case() {
        assert_eq!(expand_contractions("I'm feeling AMAZING"), "i am feeling AMAZING");
        assert_eq!(expand_contractions("DON'T Stop"), "do not Stop");
    }

    #[test]
    fn replaces_every_match() {
        assert_eq!(
            expand_contractions("It's late and we're tired, aren't we?"),
            "it is late and we are tired, are not we?"
        );
    }

    #[test]
    fn does_not_match_inside_longer_words() {
        assert_eq!(expand_contractions("wasn'tX"), "wasn'tX");
        assert_eq!(expand_contractions("Xisn't"), "Xisn't");
    }

    #[test]
    fn longest_contraction_wins() {
        assert_eq!(expand_contractions("I can't've known"), "I cannot have known");
        assert_eq!(expand_contractions("I can't go"), "I cannot go");
    }

    #[test]
    fn accepts_typographic_apostrophe() {
        assert_eq!(expand_contractions("I don\u{2019}t like it"), "I do not like it");
    }

    #[test]
    fn text_without_contractions_passes_through() {
        let text = "Today was a good day at school.";
        assert_eq!(expand_contractions(text), text);
        assert!(!ContractionExpander::new().has_contraction(text));
    }

    #[test]
    fn expansion_is_idempotent() {
        let samples = [
            "I didn't enjoy the game",
            "Y'all won't believe it, it's great",
            "I'm sad and I've lost",
            "nothing to expand here",
            "",
        ];
        for sample in samples {
            let once = expand_contractions(sample);
            assert_eq!(expand_contractions(&once), once, "not idempotent for {sample:?}");
        }
    }
}
