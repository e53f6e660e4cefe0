//! Mood2Emoji — Core library.
//! Turns a free-text mood description into one of five mood tiers with an emoji,
//! a color, and a supportive message.

pub mod config;
pub mod contractions;
pub mod error;
pub mod keywords;
pub mod mood;
pub mod negation;
pub mod pipeline;
pub mod profanity;
pub mod scorer;

pub use config::MoodConfig;
pub use contractions::{expand_contractions, ContractionExpander, CONTRACTIONS};
pub use error::{MoodError, MoodResult, EMPTY_INPUT_MESSAGE, PROFANITY_MESSAGE};
pub use keywords::{KeywordClamp, KeywordHit, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
pub use mood::{bucketize, MoodTier};
pub use negation::{NegationHit, NegationOverride};
pub use pipeline::{Adjustment, MoodPipeline, MoodPipelineBuilder, MoodReport};
pub use profanity::{ProfanityGate, DOMAIN_EXTENSIONS};
pub use scorer::{Lexicon, PatternScorer, PolarityScorer};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
