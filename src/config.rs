//! Configuration types for the classification core.
//!
//! Every heuristic threshold and multiplier in the crate lives here so none
//! of them hide as magic numbers inside scoring code. All values have
//! hand-tuned defaults; construct [`AnalysisConfig::default()`] unless a
//! consumer has a reason to retune.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the classification core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Signal modifier settings (negation, intensity, amplifiers, contrast).
    pub signals: SignalConfig,
    /// Emotion classifier settings.
    pub emotion: EmotionConfig,
    /// Domain classifier settings.
    pub domain: DomainConfig,
    /// Active-listening engine settings.
    pub engine: EngineConfig,
}

/// Signal modifier configuration shared by the emotion scoring path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Tokens scanned on each side of a lexicon hit for negators and
    /// intensity modifiers.
    pub modifier_window: usize,
    /// Multiplier applied per intensifier ("very", "really", "so") found in
    /// the window. Multiple modifiers compound multiplicatively.
    pub intensifier_factor: f64,
    /// Multiplier applied per dampener ("slightly", "kind_of") found in the
    /// window. Always < 1.
    pub dampener_factor: f64,
    /// Fraction of a negated Joy hit redirected into Sadness.
    ///
    /// "not happy" should lean sad rather than merely cancel Joy, so the
    /// inverted magnitude is split: the full hit is subtracted from Joy and
    /// this fraction of it is added to Sadness.
    pub negated_joy_redirect: f64,
    /// Extra weight on the clause after a contrast marker (" but ",
    /// " however ", " though ") relative to the clause before it.
    ///
    /// Typical range 1.2–1.35; "I was happy, but now I'm afraid" should come
    /// out Fear-dominant.
    pub contrast_weight: f64,
    /// Score bonus per exclamation mark, applied to the leading category
    /// (preferring Joy, then Surprise, else the current top).
    pub exclamation_bonus: f64,
    /// Fixed score added per recognized emoji to its mapped emotion.
    pub emoji_weight: f64,
    /// Flat boost per ALL-CAPS token (length > 2, not a URL) to the current
    /// top category.
    pub caps_bonus: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            modifier_window: 3,
            intensifier_factor: 1.5,
            dampener_factor: 0.6,
            negated_joy_redirect: 0.6,
            contrast_weight: 1.3,
            exclamation_bonus: 0.4,
            emoji_weight: 1.0,
            caps_bonus: 0.3,
        }
    }
}

/// Emotion classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionConfig {
    /// Relative margin below which the top two emotions are considered too
    /// close to call and Mixed is emitted: `(top - second) / top`.
    ///
    /// Usable band is roughly 0.22–0.40. The default sits at the low end so
    /// a contrast-promoted clause ("happy but now afraid") still produces a
    /// decisive winner rather than Mixed.
    pub mixed_margin: f64,
    /// Minimum absolute score for Joy AND the strongest negative emotion
    /// before the opposition test can fire.
    pub opposition_floor: f64,
    /// Closeness ratio (`min / max`) above which substantial Joy and a
    /// substantial negative emotion are treated as opposing cues → Mixed.
    pub opposition_closeness: f64,
    /// Minimum number of neutral-anchor hits before Neutral is allowed to
    /// score at all. Stops a single weak token ("okay") from neutral-tagging
    /// short texts.
    pub neutral_min_hits: usize,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            mixed_margin: 0.22,
            opposition_floor: 1.0,
            opposition_closeness: 0.8,
            neutral_min_hits: 2,
        }
    }
}

/// Domain classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    /// Score per phrase-rule match (high-precision multi-word cues).
    pub phrase_weight: f64,
    /// Score per keyword hit (light-stemmed single tokens).
    pub keyword_weight: f64,
    /// Multiplier on the most recent sentence's contributions.
    pub recency_multiplier: f64,
    /// Additive Family bias applied when a kinship term is present (and the
    /// spouse-only exception does not hold).
    pub family_bias: f64,
    /// Minimum score a domain needs to be reported at all.
    pub min_report: f64,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            phrase_weight: 3.0,
            keyword_weight: 1.0,
            recency_multiplier: 1.25,
            family_bias: 2.5,
            min_report: 0.75,
        }
    }
}

/// Active-listening engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Depth of the per-key recently-used-variant window. A variant index
    /// used within the last this-many picks for the same key is skipped.
    pub variant_cooldown: usize,
    /// Number of most recent family-key uses that block the same family.
    pub family_window: usize,
    /// Bigram-Jaccard similarity at or above which a candidate is rejected
    /// for being too close to the most recently emitted response.
    ///
    /// The usable band is roughly 0.45–0.60; 0.5 is the canonical value.
    pub similarity_threshold: f64,
    /// Minimum respond-steps between two recall responses.
    pub recall_min_gap: u64,
    /// Shortest remembered snippet (chars) recall will mirror back.
    pub recall_min_chars: usize,
    /// Longest remembered snippet (chars) recall will mirror back.
    pub recall_max_chars: usize,
    /// Capacity of the remembered-input FIFO.
    pub memory_cap: usize,
    /// Capacity of the emitted-response FIFO used for similarity rejection.
    pub response_history_cap: usize,
    /// Minimum confidence a supplied domain hint needs before the domain
    /// fallback stage may use it.
    pub domain_hint_threshold: f64,
    /// Score bonus for a rule match in the newest sentence.
    pub rule_recency_bonus: i32,
    /// Minimum usable capture length (chars) after trimming and
    /// boundary-snapping.
    pub min_capture_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant_cooldown: 6,
            family_window: 4,
            similarity_threshold: 0.5,
            recall_min_gap: 6,
            recall_min_chars: 15,
            recall_max_chars: 200,
            memory_cap: 16,
            response_history_cap: 16,
            domain_hint_threshold: 0.45,
            rule_recency_bonus: 2,
            min_capture_chars: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AnalysisConfig::default();
        assert!(cfg.signals.intensifier_factor > 1.0);
        assert!(cfg.signals.dampener_factor < 1.0);
        assert!(cfg.signals.contrast_weight > 1.0);
        assert!((0.0..1.0).contains(&cfg.emotion.mixed_margin));
        assert!(cfg.domain.recency_multiplier > 1.0);
        assert!(cfg.engine.variant_cooldown >= 2);
        assert!(cfg.engine.recall_min_chars < cfg.engine.recall_max_chars);
    }

    #[test]
    fn deserialize_partial_config_fills_defaults() {
        let json = r#"{ "emotion": { "mixed_margin": 0.4 } }"#;
        let cfg: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert!((cfg.emotion.mixed_margin - 0.4).abs() < f64::EPSILON);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.signals.modifier_window, 3);
        assert_eq!(cfg.engine.variant_cooldown, 6);
    }

    #[test]
    fn config_serde_round_trip() {
        let cfg = AnalysisConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.engine.memory_cap, cfg.engine.memory_cap);
        assert!((back.domain.family_bias - cfg.domain.family_bias).abs() < f64::EPSILON);
    }
}
