//! Emotion classifier: 7 scored classes plus a derived Mixed class.
//!
//! Scoring is clause-by-clause. Each contrast-split clause runs phrase
//! bumps, then token-level lexicon scoring under the negation/intensity
//! window, weighted by clause priority. Whole-text amplifiers run last over
//! the original-case text. The classifier is a pure function of its input;
//! all state lives in the shared [`Lexicons`].

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::{EmotionConfig, SignalConfig};
use crate::error::Result;
use crate::input::AnalysisInput;
use crate::lexicon::Lexicons;
use crate::outcome::{Emotion, EmotionReading, EmotionScores};
use crate::signals;
use crate::text::tokenize;

/// Rule-based emotion classifier.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    lex: Arc<Lexicons>,
    signals: SignalConfig,
    cfg: EmotionConfig,
}

impl EmotionClassifier {
    /// Classifier with default tuning over a shared lexicon store.
    #[must_use]
    pub fn new(lex: Arc<Lexicons>) -> Self {
        Self::with_config(lex, SignalConfig::default(), EmotionConfig::default())
    }

    #[must_use]
    pub fn with_config(lex: Arc<Lexicons>, signals: SignalConfig, cfg: EmotionConfig) -> Self {
        Self { lex, signals, cfg }
    }

    /// Classify an analysis input, honoring its selection range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClassifyError::Selection`] when the input
    /// carries an invalid selection range.
    pub fn classify(&self, input: &AnalysisInput) -> Result<EmotionReading> {
        Ok(self.classify_text(input.effective_text()?))
    }

    /// Classify plain text. Empty input reads Neutral with score 1.
    #[must_use]
    pub fn classify_text(&self, text: &str) -> EmotionReading {
        let mut scores = EmotionScores::default();
        if text.trim().is_empty() {
            scores.set(Emotion::Neutral, 1.0);
            return EmotionReading {
                emotion: Emotion::Neutral,
                scores,
            };
        }

        let lower = text.to_lowercase();
        let mut anchor_hits = 0usize;
        let mut anchor_score = 0.0;

        for (clause, prioritized) in signals::split_contrast(&lower) {
            let clause_weight = if prioritized {
                self.signals.contrast_weight
            } else {
                1.0
            };
            self.score_clause(clause, clause_weight, &mut scores, &mut anchor_hits, &mut anchor_score);
        }

        // Neutral only counts once enough anchors accumulate; a lone "okay"
        // in an otherwise emotional entry is noise.
        if anchor_hits >= self.cfg.neutral_min_hits {
            scores.add(Emotion::Neutral, anchor_score);
        }

        signals::apply_amplifiers(&self.lex, &self.signals, text, &mut scores);

        let emotion = self.decide(&mut scores);
        debug!(emotion = %emotion, "classified emotion");
        EmotionReading { emotion, scores }
    }

    fn score_clause(
        &self,
        clause: &str,
        clause_weight: f64,
        scores: &mut EmotionScores,
        anchor_hits: &mut usize,
        anchor_score: &mut f64,
    ) {
        for phrase in self.lex.emotion_phrases() {
            if phrase.pattern.is_match(clause) {
                for &(emotion, weight) in &phrase.bumps {
                    scores.add(emotion, weight * clause_weight);
                }
            }
        }

        let tokens = tokenize(clause);
        for (i, token) in tokens.iter().enumerate() {
            let factor = signals::modifier_factor(&self.lex, &self.signals, &tokens, i);
            if let Some(hits) = self.lex.emotion_hits(token) {
                for &(emotion, weight) in hits {
                    let contribution = weight * factor * clause_weight;
                    scores.add(emotion, contribution);
                    if emotion == Emotion::Joy && factor < 0.0 {
                        // "not happy" leans sad instead of merely anti-joy.
                        scores.add(
                            Emotion::Sadness,
                            contribution.abs() * self.signals.negated_joy_redirect,
                        );
                    }
                }
            }
            if self.lex.is_neutral_anchor(token) && factor > 0.0 {
                *anchor_hits += 1;
                *anchor_score += clause_weight;
            }
        }
        trace!(clause, clause_weight, "scored clause");
    }

    /// Pick the winner, deriving Mixed from the margin and opposition tests.
    fn decide(&self, scores: &mut EmotionScores) -> Emotion {
        let ranked = scores.ranked();
        let (top, top_score) = ranked[0];
        if top_score <= 0.0 {
            scores.set(Emotion::Neutral, 1.0);
            return Emotion::Neutral;
        }

        let (second, second_score) = ranked[1];
        let margin_too_close = second_score > 0.0
            && top != Emotion::Neutral
            && second != Emotion::Neutral
            && (top_score - second_score) / top_score < self.cfg.mixed_margin;

        let joy = scores.get(Emotion::Joy);
        let strongest_negative = [
            Emotion::Sadness,
            Emotion::Anger,
            Emotion::Fear,
            Emotion::Disgust,
        ]
        .iter()
        .map(|&e| scores.get(e))
        .fold(0.0_f64, f64::max);
        let opposed = joy >= self.cfg.opposition_floor
            && strongest_negative >= self.cfg.opposition_floor
            && joy.min(strongest_negative) / joy.max(strongest_negative)
                >= self.cfg.opposition_closeness;

        if margin_too_close || opposed {
            trace!(margin_too_close, opposed, "deriving mixed");
            return Emotion::Mixed;
        }
        top
    }
}

/// One-shot classification over the shared built-in lexicons with default
/// tuning.
#[must_use]
pub fn classify(text: &str) -> EmotionReading {
    EmotionClassifier::new(crate::lexicon::shared()).classify_text(text)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn classifier() -> EmotionClassifier {
        EmotionClassifier::new(Arc::new(Lexicons::builtin()))
    }

    #[test]
    fn empty_text_reads_neutral_with_unit_score() {
        let reading = classifier().classify_text("");
        assert_eq!(reading.emotion, Emotion::Neutral);
        assert!((reading.scores.get(Emotion::Neutral) - 1.0).abs() < 1e-9);

        let reading = classifier().classify_text("   \n  ");
        assert_eq!(reading.emotion, Emotion::Neutral);
    }

    #[test]
    fn unscorable_text_falls_back_to_neutral() {
        let reading = classifier().classify_text("Went to the store for milk.");
        assert_eq!(reading.emotion, Emotion::Neutral);
        assert!((reading.scores.get(Emotion::Neutral) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn plain_joy() {
        let reading = classifier().classify_text("I am so happy today");
        assert_eq!(reading.emotion, Emotion::Joy);
        assert!(reading.scores.get(Emotion::Joy) > 1.0);
    }

    #[test]
    fn negated_joy_leans_sadness() {
        let reading = classifier().classify_text("I am not happy");
        assert_eq!(reading.emotion, Emotion::Sadness);
        assert!(reading.scores.get(Emotion::Joy) < 0.0);
        assert!(reading.scores.get(Emotion::Sadness) > 0.0);
    }

    #[test]
    fn contrast_clause_dominates() {
        let reading = classifier().classify_text("I was happy but now I am afraid");
        assert_eq!(reading.emotion, Emotion::Fear);
        assert!(reading.scores.get(Emotion::Fear) > reading.scores.get(Emotion::Joy));
    }

    #[test]
    fn balanced_opposites_read_mixed() {
        let reading = classifier().classify_text("I feel happy and sad at the same time");
        assert_eq!(reading.emotion, Emotion::Mixed);
    }

    #[test]
    fn strong_opposition_reads_mixed() {
        let reading =
            classifier().classify_text("I got amazing news and I am grieving all at once");
        assert_eq!(reading.emotion, Emotion::Mixed);
    }

    #[test]
    fn intensifier_raises_score() {
        let plain = classifier().classify_text("I am happy");
        let intense = classifier().classify_text("I am really really happy");
        assert!(intense.scores.get(Emotion::Joy) > plain.scores.get(Emotion::Joy));
        assert_eq!(intense.emotion, Emotion::Joy);
    }

    #[test]
    fn single_anchor_does_not_score_neutral() {
        let reading = classifier().classify_text("It was fine but I am sad about the news");
        assert_eq!(reading.emotion, Emotion::Sadness);
        assert!((reading.scores.get(Emotion::Neutral)).abs() < 1e-9);
    }

    #[test]
    fn repeated_anchors_score_neutral() {
        let reading = classifier().classify_text("Pretty normal day, everything was fine and okay");
        assert_eq!(reading.emotion, Emotion::Neutral);
        assert!(reading.scores.get(Emotion::Neutral) >= 2.0);
    }

    #[test]
    fn exclamations_amplify_joy() {
        let reading = classifier().classify_text("We won!!!");
        assert_eq!(reading.emotion, Emotion::Joy);
        assert!(reading.scores.get(Emotion::Joy) > 2.0);
    }

    #[test]
    fn caps_boost_current_leader() {
        let reading = classifier().classify_text("I am SO ANGRY about this");
        assert_eq!(reading.emotion, Emotion::Anger);
        let plain = classifier().classify_text("I am so angry about this");
        assert!(reading.scores.get(Emotion::Anger) > plain.scores.get(Emotion::Anger));
    }

    #[test]
    fn emoji_score_without_words() {
        let reading = classifier().classify_text("work again 😭");
        assert_eq!(reading.emotion, Emotion::Sadness);
    }

    #[test]
    fn selection_restricts_classification() {
        // "I was thrilled. " is chars 0..16; the selection covers the rest.
        let text = "I was thrilled. Now everything is hopeless.";
        let input = AnalysisInput::new(text).with_selection(16..text.chars().count());
        let reading = classifier().classify(&input).unwrap();
        assert_eq!(reading.emotion, Emotion::Sadness);
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "Awful meeting, but the evening walk helped. Still anxious about tomorrow.";
        let a = classifier().classify_text(text);
        let b = classifier().classify_text(text);
        assert_eq!(a.emotion, b.emotion);
        assert_eq!(a.scores, b.scores);
    }

    #[test]
    fn phrase_bump_fires() {
        let reading = classifier().classify_text("I just can't believe it happened");
        assert_eq!(reading.emotion, Emotion::Surprise);
    }
}
