//! The classification pipeline.
//!
//! raw input → empty check → profanity gate → contraction expansion → lexical score →
//! keyword clamp → negation override → clamp to [-1, 1] → mood tier.
//!
//! Every component is built once and only read afterwards, so one pipeline can be
//! shared across threads behind an `Arc`.

use crate::config::MoodConfig;
use crate::contractions::ContractionExpander;
use crate::error::{MoodError, MoodResult};
use crate::keywords::{KeywordClamp, KeywordHit};
use crate::mood::MoodTier;
use crate::negation::{NegationHit, NegationOverride};
use crate::profanity::ProfanityGate;
use crate::scorer::{PatternScorer, PolarityScorer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A rule that constrained the polarity, with the value before and after it ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Adjustment {
    Keyword { hit: KeywordHit, before: f64, after: f64 },
    Negation { hit: NegationHit, before: f64, after: f64 },
}

/// Result of one successful classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodReport {
    pub tier: MoodTier,
    pub emoji: String,
    pub color: String,
    pub message: String,
    /// Final polarity in [-1, 1].
    pub polarity: f64,
    /// Scorer output before any rule ran.
    pub base_polarity: f64,
    pub expanded_text: String,
    pub adjustments: Vec<Adjustment>,
}

impl MoodReport {
    fn new(
        polarity: f64,
        base_polarity: f64,
        expanded_text: String,
        adjustments: Vec<Adjustment>,
    ) -> Self {
        let tier = MoodTier::from_polarity(polarity);
        Self {
            tier,
            emoji: tier.emoji().to_string(),
            color: tier.color().to_string(),
            message: tier.message().to_string(),
            polarity,
            base_polarity,
            expanded_text,
            adjustments,
        }
    }
}

pub struct MoodPipeline {
    gate: ProfanityGate,
    expander: ContractionExpander,
    scorer: Arc<dyn PolarityScorer>,
    keywords: KeywordClamp,
    negation: NegationOverride,
}

impl std::fmt::Debug for MoodPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoodPipeline")
            .field("profanity_terms", &self.gate.term_count())
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl MoodPipeline {
    /// Default dictionary and embedded lexicon.
    pub fn new() -> MoodResult<Self> {
        Self::builder().build()
    }

    /// Build from configuration: custom lexicon and extra profanity terms when configured.
    pub fn from_config(cfg: &MoodConfig) -> MoodResult<Self> {
        let scorer = PatternScorer::from_optional_path(cfg.lexicon_path.as_deref())?;
        let mut gate = ProfanityGate::with_defaults()?;
        if let Some(path) = cfg.profanity_words_path.as_deref() {
            gate.merge_terms_from_path(path)?;
        }
        if !cfg.extra_profanity.is_empty() {
            gate.extend_terms(&cfg.extra_profanity)?;
        }
        tracing::info!(
            profanity_terms = gate.term_count(),
            scorer = scorer.name(),
            custom_lexicon = cfg.lexicon_path.is_some(),
            "mood pipeline ready"
        );
        Self::builder().scorer(Arc::new(scorer)).gate(gate).build()
    }

    pub fn builder() -> MoodPipelineBuilder {
        MoodPipelineBuilder::default()
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Classify one submission.
    pub fn analyze(&self, raw: &str) -> MoodResult<MoodReport> {
        if raw.trim().is_empty() {
            tracing::info!("rejected submission: empty input");
            return Err(MoodError::EmptyInput);
        }
        if self.gate.contains_profanity(raw) {
            tracing::info!(chars = raw.chars().count(), "rejected submission: profanity");
            return Err(MoodError::ProfanityDetected);
        }

        let expanded = self.expander.expand(raw);
        tracing::debug!(expanded = %expanded, "contractions expanded");

        let base = self.scorer.score(&expanded).map_err(|e| {
            tracing::warn!(scorer = self.scorer.name(), error = %e, "scorer failed");
            e
        })?;
        if !base.is_finite() {
            tracing::warn!(scorer = self.scorer.name(), "scorer returned a non-finite polarity");
            return Err(MoodError::ScorerUnavailable(format!(
                "{} returned a non-finite polarity",
                self.scorer.name()
            )));
        }
        tracing::debug!(base, "lexical polarity");

        let mut polarity = base;
        let mut adjustments = Vec::new();

        if let Some(hit) = self.keywords.matched(&expanded) {
            let after = KeywordClamp::apply_hit(&hit, polarity);
            tracing::debug!(?hit, before = polarity, after, "keyword clamp");
            adjustments.push(Adjustment::Keyword {
                hit,
                before: polarity,
                after,
            });
            polarity = after;
        }

        if let Some(hit) = self.negation.matched(&expanded) {
            let after = NegationOverride::apply_hit(hit, polarity);
            tracing::debug!(?hit, before = polarity, after, "negation override");
            adjustments.push(Adjustment::Negation {
                hit,
                before: polarity,
                after,
            });
            polarity = after;
        }

        let polarity = polarity.clamp(-1.0, 1.0);
        let report = MoodReport::new(polarity, base, expanded, adjustments);
        tracing::debug!(tier = %report.tier, polarity, "classified");
        Ok(report)
    }
}

/// Assembles a [`MoodPipeline`]; unset parts fall back to the built-in defaults.
#[derive(Default)]
pub struct MoodPipelineBuilder {
    scorer: Option<Arc<dyn PolarityScorer>>,
    gate: Option<ProfanityGate>,
}

impl MoodPipelineBuilder {
    pub fn scorer(mut self, scorer: Arc<dyn PolarityScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn gate(mut self, gate: ProfanityGate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn build(self) -> MoodResult<MoodPipeline> {
        let scorer = match self.scorer {
            Some(s) => s,
            None => Arc::new(PatternScorer::embedded()?),
        };
        let gate = match self.gate {
            Some(g) => g,
            None => ProfanityGate::with_defaults()?,
        };
        Ok(MoodPipeline {
            gate,
            expander: ContractionExpander::new(),
            scorer,
            keywords: KeywordClamp::new(),
            negation: NegationOverride::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl PolarityScorer for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn score(&self, _text: &str) -> MoodResult<f64> {
            Ok(self.0)
        }
    }

    fn with_score(p: f64) -> MoodPipeline {
        MoodPipeline::builder().scorer(Arc::new(Fixed(p))).build().unwrap()
    }

    #[test]
    fn untouched_score_is_reported_as_is() {
        let report = with_score(0.3).analyze("the bus was on time").unwrap();
        assert_eq!(report.polarity, 0.3);
        assert_eq!(report.base_polarity, 0.3);
        assert_eq!(report.tier, MoodTier::Happy);
        assert!(report.adjustments.is_empty());
    }

    #[test]
    fn negation_overrides_keyword_clamp() {
        // "fun" lifts to 0.4, then "not ... fun" forces -0.5
        let report = with_score(0.0).analyze("It was not fun").unwrap();
        assert_eq!(report.polarity, -0.5);
        assert_eq!(report.tier, MoodTier::VerySad);
        assert_eq!(report.adjustments.len(), 2);
        assert!(matches!(report.adjustments[0], Adjustment::Keyword { after, .. } if after == 0.4));
        assert!(matches!(
            report.adjustments[1],
            Adjustment::Negation { hit: NegationHit::NegatedPositive, after, .. } if after == -0.5
        ));
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(with_score(3.0).analyze("hello there").unwrap().polarity, 1.0);
        assert_eq!(with_score(-7.5).analyze("hello there").unwrap().polarity, -1.0);
    }

    #[test]
    fn non_finite_scores_fail_closed() {
        let err = with_score(f64::NAN).analyze("hello there").unwrap_err();
        assert!(matches!(err, MoodError::ScorerUnavailable(_)));
    }

    #[test]
    fn report_carries_tier_presentation() {
        let report = with_score(0.9).analyze("best day ever").unwrap();
        assert_eq!(report.tier, MoodTier::VeryHappy);
        assert_eq!(report.emoji, "😄");
        assert_eq!(report.color, "#4CAF50");
        assert_eq!(report.message, MoodTier::VeryHappy.message());
    }

    #[test]
    fn report_serializes_for_the_gateway() {
        let report = with_score(0.0).analyze("We won!").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tier"], "happy");
        assert_eq!(json["adjustments"][0]["rule"], "keyword");
        assert_eq!(json["adjustments"][0]["hit"]["list"], "positive");
        assert_eq!(json["adjustments"][0]["hit"]["keyword"], "won");
    }

    #[test]
    fn pipeline_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MoodPipeline>();
    }
}
