//! Mood tiers: the five buckets a final polarity falls into.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTier {
    /// polarity > 0.5
    VeryHappy,
    /// 0 < polarity <= 0.5
    Happy,
    /// polarity == 0
    Neutral,
    /// -0.5 < polarity < 0
    Sad,
    /// polarity <= -0.5
    VerySad,
}

impl MoodTier {
    pub const ALL: [MoodTier; 5] = [
        MoodTier::VeryHappy,
        MoodTier::Happy,
        MoodTier::Neutral,
        MoodTier::Sad,
        MoodTier::VerySad,
    ];

    /// Bucket a final polarity. Ranges are tested top-down, first match wins, so every
    /// value in [-1, 1] lands in exactly one tier.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.5 {
            MoodTier::VeryHappy
        } else if polarity > 0.0 {
            MoodTier::Happy
        } else if polarity == 0.0 {
            MoodTier::Neutral
        } else if polarity > -0.5 {
            MoodTier::Sad
        } else {
            MoodTier::VerySad
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodTier::VeryHappy => "😄",
            MoodTier::Happy => "🙂",
            MoodTier::Neutral => "😐",
            MoodTier::Sad => "🙁",
            MoodTier::VerySad => "😢",
        }
    }

    /// Card background color (hex).
    pub fn color(&self) -> &'static str {
        match self {
            MoodTier::VeryHappy => "#4CAF50",
            MoodTier::Happy => "#8BC34A",
            MoodTier::Neutral => "#FFC107",
            MoodTier::Sad => "#FF9800",
            MoodTier::VerySad => "#F44336",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MoodTier::VeryHappy => {
                "Yay! You seem really happy! Keep spreading those positive vibes 🌟"
            }
            MoodTier::Happy => "You look happy today! Stay cheerful and share a smile 😄",
            MoodTier::Neutral => {
                "Feeling neutral is okay. Maybe do something fun to brighten your day 🌈"
            }
            MoodTier::Sad => {
                "A little sad? That’s okay. Every day won’t be perfect, but you’re doing great 💪"
            }
            MoodTier::VerySad => {
                "Oh no! You seem really down. Remember, tough times don’t last — you’re strong 💖"
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodTier::VeryHappy => "very_happy",
            MoodTier::Happy => "happy",
            MoodTier::Neutral => "neutral",
            MoodTier::Sad => "sad",
            MoodTier::VerySad => "very_sad",
        }
    }
}

impl fmt::Display for MoodTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Shorthand for [`MoodTier::from_polarity`].
pub fn bucketize(polarity: f64) -> MoodTier {
    MoodTier::from_polarity(polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(bucketize(1.0), MoodTier::VeryHappy);
        assert_eq!(bucketize(0.500001), MoodTier::VeryHappy);
        assert_eq!(bucketize(0.5), MoodTier::Happy);
        assert_eq!(bucketize(f64::MIN_POSITIVE), MoodTier::Happy);
        assert_eq!(bucketize(0.0), MoodTier::Neutral);
        assert_eq!(bucketize(-0.0), MoodTier::Neutral);
        assert_eq!(bucketize(-f64::MIN_POSITIVE), MoodTier::Sad);
        assert_eq!(bucketize(-0.499999), MoodTier::Sad);
        assert_eq!(bucketize(-0.5), MoodTier::VerySad);
        assert_eq!(bucketize(-1.0), MoodTier::VerySad);
    }

    #[test]
    fn tiers_partition_the_range() {
        // Each tier's own predicate must hold for exactly the tier the bucketizer picks.
        let predicates: [(MoodTier, fn(f64) -> bool); 5] = [
            (MoodTier::VeryHappy, |p| p > 0.5),
            (MoodTier::Happy, |p| p > 0.0 && p <= 0.5),
            (MoodTier::Neutral, |p| p == 0.0),
            (MoodTier::Sad, |p| p > -0.5 && p < 0.0),
            (MoodTier::VerySad, |p| p <= -0.5),
        ];
        for step in 0..=20_000 {
            let p = -1.0 + step as f64 * 0.0001;
            let matching: Vec<MoodTier> = predicates
                .iter()
                .filter(|(_, pred)| pred(p))
                .map(|(tier, _)| *tier)
                .collect();
            assert_eq!(matching.len(), 1, "{p} matched {matching:?}");
            assert_eq!(matching[0], bucketize(p), "{p}");
        }
    }

    #[test]
    fn every_tier_has_distinct_presentation() {
        let emojis: std::collections::HashSet<_> = MoodTier::ALL.iter().map(|t| t.emoji()).collect();
        let colors: std::collections::HashSet<_> = MoodTier::ALL.iter().map(|t| t.color()).collect();
        assert_eq!(emojis.len(), 5);
        assert_eq!(colors.len(), 5);
        assert!(MoodTier::ALL.iter().all(|t| !t.message().is_empty()));
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&MoodTier::VeryHappy).unwrap(), "\"very_happy\"");
        assert_eq!(serde_json::to_string(&MoodTier::Sad).unwrap(), "\"sad\"");
    }
}
