//! Keyword Clamp: fixed emotional keywords pull polarity to a ±0.4 floor/ceiling.
//!
//! Matching is plain substring containment on the lowercased expanded text, so
//! `lost` also fires inside `lostness` and `sad` inside `crusade`. That quirk is kept
//! so classifications stay identical to the classroom tool students already use.

use serde::{Deserialize, Serialize};

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "won",
    "victory",
    "passed",
    "achieved",
    "celebrated",
    "amazing",
    "awesome",
    "great",
    "good",
    "excited",
    "fun",
    "love",
    "enjoyed",
    "happy",
    "proud",
    "win",
    "success",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "lost", "failed", "sad", "angry", "upset", "cry", "hurt", "bad", "bored", "tired", "alone",
    "scared", "lose", "failure",
];

/// Polarity floor when a positive keyword is present.
pub const POSITIVE_FLOOR: f64 = 0.4;
/// Polarity ceiling when only a negative keyword is present.
pub const NEGATIVE_CEILING: f64 = -0.4;

/// Which keyword list fired, with the first matching keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "list", content = "keyword", rename_all = "snake_case")]
pub enum KeywordHit {
    Positive(String),
    Negative(String),
}

#[derive(Debug, Clone)]
pub struct KeywordClamp {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

impl Default for KeywordClamp {
    fn default() -> Self {
        Self {
            positive: POSITIVE_KEYWORDS,
            negative: NEGATIVE_KEYWORDS,
        }
    }
}

impl KeywordClamp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positive list is checked first; the negative list only when nothing positive matched.
    pub fn matched(&self, text: &str) -> Option<KeywordHit> {
        let lower = text.to_lowercase();
        if let Some(kw) = self.positive.iter().find(|kw| lower.contains(*kw)) {
            return Some(KeywordHit::Positive((*kw).to_string()));
        }
        self.negative
            .iter()
            .find(|kw| lower.contains(*kw))
            .map(|kw| KeywordHit::Negative((*kw).to_string()))
    }

    /// Apply the floor/ceiling for `text` to `polarity`.
    pub fn clamp(&self, text: &str, polarity: f64) -> f64 {
        match self.matched(text) {
            Some(hit) => Self::apply_hit(&hit, polarity),
            None => polarity,
        }
    }

    pub(crate) fn apply_hit(hit: &KeywordHit, polarity: f64) -> f64 {
        match hit {
            KeywordHit::Positive(_) => polarity.max(POSITIVE_FLOOR),
            KeywordHit::Negative(_) => polarity.min(NEGATIVE_CEILING),
        }
    }
}
