//! Lexical polarity scoring.
//!
//! ## Architecture
//!
//! The pipeline only sees the [`PolarityScorer`] trait. The shipped backend is
//! [`PatternScorer`], a deterministic lexicon matcher:
//!
//! - every lexicon word contributes its polarity,
//! - intensifiers (`very`, `really`, ...) scale the next sentiment word,
//! - `not` / `no` / `never` multiply the next sentiment word by -0.5,
//! - a negation survives one-letter words and an intensifier survives words of
//!   up to two letters; any longer unknown word drops them,
//! - `!` boosts the preceding contribution by 1.25,
//! - clause punctuation drops pending intensifiers and negations,
//! - the score is the mean of the contributions, clamped to [-1, 1].
//!
//! A scorer that cannot produce a score returns [`MoodError::ScorerUnavailable`];
//! callers never receive a silent neutral default.

use crate::error::{MoodError, MoodResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Lexicon shipped with the crate.
const EMBEDDED_LEXICON: &str = include_str!("../data/en_sentiment.tsv");

/// Factor applied to a sentiment word under negation ("not good" = 0.7 * -0.5).
pub const NEGATION_FACTOR: f64 = -0.5;

/// Factor applied to the preceding assessment by `!`.
pub const EXCLAMATION_BOOST: f64 = 1.25;

const NEGATIONS: &[&str] = &["not", "no", "never", "cannot", "n't"];

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":'\(|[:;]-?[()d]|<3|\p{L}+(?:'\p{L}+)?|[.!?,;]")
        .expect("token pattern is a valid regex")
});

/// Produces a continuous polarity in [-1, 1] for already-expanded text.
pub trait PolarityScorer: Send + Sync {
    /// Backend name, used in logs.
    fn name(&self) -> &str;

    /// Score `text`. Errors mean the capability is unavailable, not that the text is neutral.
    fn score(&self, text: &str) -> MoodResult<f64>;
}

/// Role of a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Carries polarity of its own.
    Word,
    /// Scales the next sentiment word by its intensity.
    Modifier,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub intensity: f64,
    pub kind: EntryKind,
}

/// Word -> polarity table for [`PatternScorer`].
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    /// The lexicon compiled into the crate.
    pub fn embedded() -> MoodResult<Self> {
        Self::parse(EMBEDDED_LEXICON, "embedded lexicon")
    }

    /// Load a lexicon file in the same TSV layout as the embedded one.
    pub fn from_path(path: &Path) -> MoodResult<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| {
            MoodError::ScorerUnavailable(format!("cannot read lexicon {}: {}", path.display(), e))
        })?;
        Self::parse(&src, &path.display().to_string())
    }

    /// Parse `word<TAB>polarity<TAB>intensity<TAB>kind` lines. Blank and `#` lines are skipped.
    pub fn parse(src: &str, origin: &str) -> MoodResult<Self> {
        let mut entries = HashMap::new();
        for (idx, raw) in src.lines().enumerate() {
            let line = raw.trim_end();
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let bad = |what: &str| {
                MoodError::ScorerUnavailable(format!("{} line {}: {}", origin, idx + 1, what))
            };
            let cols: Vec<&str> = line.split('\t').map(str::trim).collect();
            if cols.len() != 4 {
                return Err(bad("expected 4 tab-separated columns"));
            }
            let polarity: f64 = cols[1].parse().map_err(|_| bad("invalid polarity"))?;
            let intensity: f64 = cols[2].parse().map_err(|_| bad("invalid intensity"))?;
            if !(-1.0..=1.0).contains(&polarity) {
                return Err(bad("polarity outside [-1, 1]"));
            }
            if !intensity.is_finite() || intensity <= 0.0 {
                return Err(bad("intensity must be positive"));
            }
            let kind = match cols[3] {
                "word" => EntryKind::Word,
                "mod" => EntryKind::Modifier,
                _ => return Err(bad("kind must be \"word\" or \"mod\"")),
            };
            entries.insert(
                cols[0].to_lowercase(),
                LexiconEntry {
                    polarity,
                    intensity,
                    kind,
                },
            );
        }
        if entries.is_empty() {
            return Err(MoodError::ScorerUnavailable(format!("{} has no entries", origin)));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pattern-based lexicon scorer. Deterministic; no statistical model.
#[derive(Debug, Clone)]
pub struct PatternScorer {
    lexicon: Arc<Lexicon>,
}

impl PatternScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Scorer over the embedded lexicon.
    pub fn embedded() -> MoodResult<Self> {
        Ok(Self::new(Lexicon::embedded()?))
    }

    /// Scorer over `path` when given, the embedded lexicon otherwise.
    pub fn from_optional_path(path: Option<&Path>) -> MoodResult<Self> {
        match path {
            Some(p) => Ok(Self::new(Lexicon::from_path(p)?)),
            None => Self::embedded(),
        }
    }

    /// Per-word polarity contributions, in text order.
    fn assessments(&self, text: &str) -> Vec<f64> {
        let lower = text.to_lowercase();
        let mut out: Vec<f64> = Vec::new();
        let mut intensity: Option<f64> = None;
        let mut negated = false;

        for m in TOKEN_PATTERN.find_iter(&lower) {
            let token = m.as_str();
            if matches!(token, "." | "!" | "?" | "," | ";") {
                if token == "!" {
                    if let Some(last) = out.last_mut() {
                        *last = (*last * EXCLAMATION_BOOST).clamp(-1.0, 1.0);
                    }
                }
                intensity = None;
                negated = false;
                continue;
            }
            if NEGATIONS.contains(&token) || token.ends_with("n't") {
                negated = true;
                continue;
            }
            match self.lexicon.get(token) {
                Some(entry) if entry.kind == EntryKind::Modifier => {
                    intensity = Some(intensity.unwrap_or(1.0) * entry.intensity);
                }
                Some(entry) => {
                    let mut p = entry.polarity * intensity.take().unwrap_or(1.0);
                    if negated {
                        p *= NEGATION_FACTOR;
                        negated = false;
                    }
                    out.push(p.clamp(-1.0, 1.0));
                }
                None => {
                    // "not a good", "really a good"
                    let len = token.chars().count();
                    if len > 1 {
                        negated = false;
                    }
                    if len > 2 {
                        intensity = None;
                    }
                }
            }
        }
        out
    }
}

impl PolarityScorer for PatternScorer {
    fn name(&self) -> &str {
        "pattern"
    }

    fn score(&self, text: &str) -> MoodResult<f64> {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return Ok(0.0);
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        if !mean.is_finite() {
            return Err(MoodError::ScorerUnavailable(format!(
                "non-finite polarity for {} assessments",
                assessments.len()
            )));
        }
        Ok(mean.clamp(-1.0, 1.0))
    }
}
