//! Topical domain classifier over the 18-entry taxonomy.
//!
//! Sentences are scored independently and merged, newest first, with a
//! recency multiplier on the most recent sentence. Phrase rules run before
//! keywords; their suppressions apply after keyword accumulation so a
//! phrase can zero a confounding domain for that sentence ("worked out"
//! must not also score Work/Career).

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::DomainConfig;
use crate::error::Result;
use crate::input::AnalysisInput;
use crate::lexicon::{Lexicons, PhraseEffect};
use crate::outcome::{Domain, DomainReading, DomainScores};
use crate::text::{split_sentences, tokenize};

/// Rule-based domain classifier.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    lex: Arc<Lexicons>,
    cfg: DomainConfig,
}

impl DomainClassifier {
    /// Classifier with default tuning over a shared lexicon store.
    #[must_use]
    pub fn new(lex: Arc<Lexicons>) -> Self {
        Self::with_config(lex, DomainConfig::default())
    }

    #[must_use]
    pub fn with_config(lex: Arc<Lexicons>, cfg: DomainConfig) -> Self {
        Self { lex, cfg }
    }

    /// Classify an analysis input, honoring its selection range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClassifyError::Selection`] when the input
    /// carries an invalid selection range.
    pub fn classify(&self, input: &AnalysisInput) -> Result<DomainReading> {
        Ok(self.classify_text(input.effective_text()?))
    }

    /// Classify plain text. Empty input yields an empty ranking.
    #[must_use]
    pub fn classify_text(&self, text: &str) -> DomainReading {
        let mut total = DomainScores::default();
        let sentences = split_sentences(text);

        for (age, sentence) in sentences.iter().rev().enumerate() {
            let sentence_scores = self.score_sentence(sentence);
            let weight = if age == 0 {
                self.cfg.recency_multiplier
            } else {
                1.0
            };
            total.merge_weighted(&sentence_scores, weight);
        }

        let ranked = total.ranked(self.cfg.min_report);
        let primary = ranked.first().map(|(d, _)| *d);
        debug!(primary = ?primary.map(Domain::label), reported = ranked.len(), "classified domain");
        DomainReading { ranked, primary }
    }

    fn score_sentence(&self, sentence: &str) -> DomainScores {
        let mut scores = DomainScores::default();
        let lower = sentence.to_lowercase();

        let mut suppressed: Vec<Domain> = Vec::new();
        for phrase in self.lex.domain_phrases() {
            if phrase.pattern.is_match(&lower) {
                for effect in &phrase.effects {
                    match *effect {
                        PhraseEffect::Boost(domain, units) => {
                            scores.add(domain, units * self.cfg.phrase_weight);
                        }
                        PhraseEffect::Suppress(domain) => suppressed.push(domain),
                    }
                }
            }
        }

        let tokens = tokenize(&lower);
        let mut kin_present = false;
        for token in &tokens {
            if let Some(hits) = self.lex.domain_hits(token) {
                for &(domain, units) in hits {
                    scores.add(domain, units * self.cfg.keyword_weight);
                }
            }
            kin_present = kin_present || self.lex.is_kinship(token);
        }

        // Suppressions land after keywords so the confounder's own keyword
        // hits are wiped along with everything else in this sentence.
        for domain in suppressed {
            scores.suppress(domain);
        }

        // Kin mentions pull the sentence toward Family. Spouse-type terms
        // are deliberately not in the kinship set, so partner-only entries
        // stay in Relationships.
        if kin_present {
            scores.add(Domain::Family, self.cfg.family_bias);
        }

        trace!(sentence, "scored sentence");
        scores
    }
}

/// One-shot classification over the shared built-in lexicons with default
/// tuning.
#[must_use]
pub fn classify(text: &str) -> DomainReading {
    DomainClassifier::new(crate::lexicon::shared()).classify_text(text)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn classifier() -> DomainClassifier {
        DomainClassifier::new(Arc::new(Lexicons::builtin()))
    }

    #[test]
    fn empty_text_reports_nothing() {
        let reading = classifier().classify_text("");
        assert!(reading.ranked.is_empty());
        assert!(reading.primary.is_none());
        assert_eq!(reading.to_output().primary, "General");
    }

    #[test]
    fn single_topic_wins() {
        let reading = classifier().classify_text("Long day at the office with back to back meetings");
        assert_eq!(reading.primary, Some(Domain::WorkCareer));
    }

    #[test]
    fn workout_overrides_work() {
        let reading = classifier().classify_text("I worked out at the gym");
        assert_eq!(reading.primary, Some(Domain::ExerciseFitness));
        assert!(reading
            .ranked
            .iter()
            .all(|(d, _)| *d != Domain::WorkCareer));
    }

    #[test]
    fn workout_in_one_sentence_leaves_real_work_alone() {
        let reading =
            classifier().classify_text("My boss piled on deadlines at work. I worked out after.");
        // The suppression is sentence-local; the first sentence still scores.
        assert!(reading
            .ranked
            .iter()
            .any(|(d, _)| *d == Domain::WorkCareer));
        assert_eq!(reading.primary, Some(Domain::ExerciseFitness));
    }

    #[test]
    fn kinship_outweighs_money_mentions() {
        let reading = classifier().classify_text("Talked to my mom about rent money");
        assert_eq!(reading.primary, Some(Domain::Family));
        let family = reading
            .ranked
            .iter()
            .find(|(d, _)| *d == Domain::Family)
            .unwrap()
            .1;
        let money = reading
            .ranked
            .iter()
            .find(|(d, _)| *d == Domain::MoneyFinances)
            .unwrap()
            .1;
        assert!(family >= money);
    }

    #[test]
    fn spouse_only_stays_relationships() {
        let reading = classifier().classify_text("Long talk with my husband about our marriage");
        assert_eq!(reading.primary, Some(Domain::Relationships));
        assert!(reading.ranked.iter().all(|(d, _)| *d != Domain::Family));
    }

    #[test]
    fn spouse_with_kin_gets_family_bias() {
        let reading = classifier().classify_text("My wife and kids came along to the park");
        assert_eq!(reading.primary, Some(Domain::Family));
    }

    #[test]
    fn newest_sentence_weighs_more() {
        let reading = classifier().classify_text("I cooked. Then I hiked.");
        // One keyword each; recency decides.
        assert_eq!(reading.primary, Some(Domain::TravelNature));

        let reversed = classifier().classify_text("I hiked. Then I cooked.");
        assert_eq!(reversed.primary, Some(Domain::FoodEating));
    }

    #[test]
    fn scores_are_rounded_to_two_decimals() {
        let reading = classifier().classify_text("Talked to my mom about rent money");
        let family = reading
            .ranked
            .iter()
            .find(|(d, _)| *d == Domain::Family)
            .unwrap()
            .1;
        // (1 keyword + 2.5 bias) * 1.25 recency = 4.375, reported as 4.38.
        assert!((family - 4.38).abs() < 1e-9);
    }

    #[test]
    fn min_report_filters_weak_domains() {
        let lex = Arc::new(Lexicons::builtin());
        let cfg = DomainConfig {
            min_report: 2.0,
            ..DomainConfig::default()
        };
        let reading = DomainClassifier::with_config(lex, cfg)
            .classify_text("Checked email. Later went hiking on the new trail.");
        // Work scores 1.0 in an older sentence and falls under the floor.
        assert!(reading.ranked.iter().all(|(d, _)| *d != Domain::WorkCareer));
        assert_eq!(reading.primary, Some(Domain::TravelNature));
    }

    #[test]
    fn selection_restricts_classification() {
        let text = "Budget review all morning. Amazing dinner at the new restaurant.";
        let start = "Budget review all morning. ".chars().count();
        let input = AnalysisInput::new(text).with_selection(start..text.chars().count());
        let reading = classifier().classify(&input).unwrap();
        assert_eq!(reading.primary, Some(Domain::FoodEating));
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "Skipped the gym for a work deadline. Mom called about the weekend.";
        let a = classifier().classify_text(text);
        let b = classifier().classify_text(text);
        assert_eq!(a, b);
    }
}
