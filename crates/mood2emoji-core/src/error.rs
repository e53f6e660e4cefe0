//! Error types for the Mood2Emoji pipeline

use thiserror::Error;

/// Shown when a submission is empty or whitespace-only.
pub const EMPTY_INPUT_MESSAGE: &str = "⚠️ Please type something first.";

/// Shown when the profanity gate rejects a submission.
pub const PROFANITY_MESSAGE: &str = "🚫 Oops! Please use some humble words 💖";

/// Result type alias for pipeline operations
pub type MoodResult<T> = Result<T, MoodError>;

/// Errors that can occur while classifying a submission
#[derive(Error, Debug)]
pub enum MoodError {
    #[error("input is empty")]
    EmptyInput,

    #[error("input contains disallowed words")]
    ProfanityDetected,

    #[error("sentiment scorer unavailable: {0}")]
    ScorerUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MoodError {
    /// True for outcomes that are answered with a prompt to the user rather than a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, MoodError::EmptyInput | MoodError::ProfanityDetected)
    }

    /// Fixed user-facing text for rejections; `None` for real failures.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            MoodError::EmptyInput => Some(EMPTY_INPUT_MESSAGE),
            MoodError::ProfanityDetected => Some(PROFANITY_MESSAGE),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for MoodError {
    fn from(err: config::ConfigError) -> Self {
        MoodError::Config(err.to_string())
    }
}
