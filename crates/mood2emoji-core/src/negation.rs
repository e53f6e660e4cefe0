//! Negation Override: "did not enjoy" forces polarity negative, "not sad" forces it positive.
//!
//! Runs after the keyword clamp and wins over it. A negation token may appear
//! anywhere before the sentiment token on the same line.

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NEGATION_TOKENS: &[&str] = &[
    "do not", "does not", "did not", "not", "never", "no", "cannot", "can not", "won not",
    "will not",
];

pub const NEGATED_POSITIVE_TARGETS: &[&str] = &[
    "happy", "like", "love", "enjoy", "enjoyed", "good", "great", "awesome", "fun", "excited",
    "win", "won", "pass", "passed",
];

pub const NEGATED_NEGATIVE_TARGETS: &[&str] = &[
    "sad", "hate", "dislike", "angry", "upset", "cry", "hurt", "bad", "bored", "tired", "alone",
    "scared", "fail", "failed", "lost",
];

/// Ceiling applied when a positive word is negated.
pub const NEGATED_POSITIVE_CEILING: f64 = -0.5;
/// Floor applied when a negative word is negated.
pub const NEGATED_NEGATIVE_FLOOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegationHit {
    NegatedPositive,
    NegatedNegative,
}

/// The two precompiled negation patterns.
#[derive(Debug, Clone)]
pub struct NegationOverride {
    negated_positive: Regex,
    negated_negative: Regex,
}

impl Default for NegationOverride {
    fn default() -> Self {
        Self::new()
    }
}

impl NegationOverride {
    pub fn new() -> Self {
        Self {
            negated_positive: negation_pattern(NEGATED_POSITIVE_TARGETS),
            negated_negative: negation_pattern(NEGATED_NEGATIVE_TARGETS),
        }
    }

    /// Negated-positive is tested first; negated-negative only as the else branch.
    pub fn matched(&self, text: &str) -> Option<NegationHit> {
        if self.negated_positive.is_match(text) {
            Some(NegationHit::NegatedPositive)
        } else if self.negated_negative.is_match(text) {
            Some(NegationHit::NegatedNegative)
        } else {
            None
        }
    }

    pub fn apply(&self, text: &str, polarity: f64) -> f64 {
        match self.matched(text) {
            Some(hit) => Self::apply_hit(hit, polarity),
            None => polarity,
        }
    }

    pub(crate) fn apply_hit(hit: NegationHit, polarity: f64) -> f64 {
        match hit {
            NegationHit::NegatedPositive => polarity.min(NEGATED_POSITIVE_CEILING),
            NegationHit::NegatedNegative => polarity.max(NEGATED_NEGATIVE_FLOOR),
        }
    }
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn negation_pattern(targets: &[&str]) -> Regex {
    let pattern = format!(
        r"(?i)\b(?:{})\b.*\b(?:{})\b",
        alternation(NEGATION_TOKENS),
        alternation(targets)
    );
    Regex::new(&pattern).expect("negation word lists compile to a valid regex")
}
