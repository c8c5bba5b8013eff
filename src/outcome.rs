//! Classification outcome types shared by the emotion and domain classifiers.
//!
//! Both classifiers speak the same normalized output contract
//! ([`AnalyzerOutput`]) so that consumers (dashboards, batch writers) can
//! render either without special-casing. The category sets are closed
//! enumerations; unknown names are rejected at the boundary by
//! [`Emotion::from_name`] and [`Domain::from_name`] rather than silently
//! defaulted.

use crate::error::{ClassifyError, Result};
use serde::{Deserialize, Serialize};

/// Label surfaced as `primary` when no domain clears the report threshold.
///
/// The closed 18-entry taxonomy deliberately has no catch-all member; this
/// label exists only on the output surface.
pub const GENERAL_LABEL: &str = "General";

// ── Emotion ─────────────────────────────────────────────────────────

/// The eight emotion classes.
///
/// Seven are scored directly; `Mixed` is never scored. It is derived when
/// the top two scores are too close to call or when Joy and a strong
/// negative emotion oppose each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Neutral,
    Mixed,
}

/// The seven emotions that accumulate score directly.
pub const SCORABLE_EMOTIONS: [Emotion; 7] = [
    Emotion::Joy,
    Emotion::Sadness,
    Emotion::Anger,
    Emotion::Fear,
    Emotion::Surprise,
    Emotion::Disgust,
    Emotion::Neutral,
];

impl Emotion {
    /// Stable numeric id (1..=8), matching the historical wire values.
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Joy => 1,
            Self::Sadness => 2,
            Self::Anger => 3,
            Self::Fear => 4,
            Self::Surprise => 5,
            Self::Disgust => 6,
            Self::Neutral => 7,
            Self::Mixed => 8,
        }
    }

    /// Display label ("Joy", "Sadness", …).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Sadness => "Sadness",
            Self::Anger => "Anger",
            Self::Fear => "Fear",
            Self::Surprise => "Surprise",
            Self::Disgust => "Disgust",
            Self::Neutral => "Neutral",
            Self::Mixed => "Mixed",
        }
    }

    /// All eight classes in id order.
    #[must_use]
    pub fn all() -> [Emotion; 8] {
        [
            Self::Joy,
            Self::Sadness,
            Self::Anger,
            Self::Fear,
            Self::Surprise,
            Self::Disgust,
            Self::Neutral,
            Self::Mixed,
        ]
    }

    /// Parse a case-insensitive emotion label.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UnknownEmotion`] for anything outside the
    /// fixed 8-class set.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "joy" => Ok(Self::Joy),
            "sadness" => Ok(Self::Sadness),
            "anger" => Ok(Self::Anger),
            "fear" => Ok(Self::Fear),
            "surprise" => Ok(Self::Surprise),
            "disgust" => Ok(Self::Disgust),
            "neutral" => Ok(Self::Neutral),
            "mixed" => Ok(Self::Mixed),
            other => Err(ClassifyError::UnknownEmotion(other.to_owned())),
        }
    }

    /// Whether this is one of the four negative-valence classes.
    #[must_use]
    pub fn is_negative(self) -> bool {
        matches!(self, Self::Sadness | Self::Anger | Self::Fear | Self::Disgust)
    }

    fn index(self) -> Option<usize> {
        match self {
            Self::Joy => Some(0),
            Self::Sadness => Some(1),
            Self::Anger => Some(2),
            Self::Fear => Some(3),
            Self::Surprise => Some(4),
            Self::Disgust => Some(5),
            Self::Neutral => Some(6),
            Self::Mixed => None,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw score accumulator over the seven scorable emotions.
///
/// Values can go negative under negation; consumers read relative ranking
/// only. `Mixed` never holds score and reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EmotionScores {
    values: [f64; 7],
}

impl EmotionScores {
    /// Current accumulated score for an emotion (`Mixed` reads 0).
    #[must_use]
    pub fn get(&self, emotion: Emotion) -> f64 {
        emotion.index().map_or(0.0, |i| self.values[i])
    }

    /// Add to an emotion's accumulator. Adding to `Mixed` is a no-op.
    pub fn add(&mut self, emotion: Emotion, delta: f64) {
        if let Some(i) = emotion.index() {
            self.values[i] += delta;
        }
    }

    /// Overwrite an emotion's accumulator. Setting `Mixed` is a no-op.
    pub fn set(&mut self, emotion: Emotion, value: f64) {
        if let Some(i) = emotion.index() {
            self.values[i] = value;
        }
    }

    /// Merge another accumulator into this one, scaling it by `weight`.
    pub fn merge_weighted(&mut self, other: &EmotionScores, weight: f64) {
        for i in 0..self.values.len() {
            self.values[i] += other.values[i] * weight;
        }
    }

    /// True when every accumulator is exactly zero.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Scores ranked descending. Ties break toward the lower emotion id so
    /// ranking is fully deterministic.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Emotion, f64)> {
        let mut out: Vec<(Emotion, f64)> = SCORABLE_EMOTIONS
            .iter()
            .map(|&e| (e, self.get(e)))
            .collect();
        out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        out
    }

    /// The top-ranked emotion and its score.
    #[must_use]
    pub fn top(&self) -> (Emotion, f64) {
        self.ranked()[0]
    }
}

/// Result of emotion classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionReading {
    /// The winning class, possibly the derived `Mixed`.
    pub emotion: Emotion,
    /// Raw accumulators behind the decision.
    pub scores: EmotionScores,
}

impl EmotionReading {
    /// Normalize into the shared output contract.
    #[must_use]
    pub fn to_output(&self) -> AnalyzerOutput {
        let ranked = self
            .scores
            .ranked()
            .into_iter()
            .map(|(e, s)| (e.label().to_owned(), s))
            .collect();
        AnalyzerOutput {
            label: self.emotion.label().to_owned(),
            id: Some(self.emotion.id()),
            ranked,
            primary: self.emotion.label().to_owned(),
        }
    }
}

// ── Domain ──────────────────────────────────────────────────────────

/// The 18-entry topical domain taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    ExerciseFitness,
    Family,
    Friends,
    Relationships,
    LoveRomance,
    FoodEating,
    SleepRest,
    HealthMedical,
    WorkCareer,
    MoneyFinances,
    SchoolLearning,
    SpiritualityReligion,
    RecreationLeisure,
    TravelNature,
    CreativityArt,
    CommunitySocietyPolitics,
    TechnologyMediaInternet,
    SelfGrowthHabits,
}

/// All 18 domains in taxonomy order (used for deterministic tie-breaking).
pub const ALL_DOMAINS: [Domain; 18] = [
    Domain::ExerciseFitness,
    Domain::Family,
    Domain::Friends,
    Domain::Relationships,
    Domain::LoveRomance,
    Domain::FoodEating,
    Domain::SleepRest,
    Domain::HealthMedical,
    Domain::WorkCareer,
    Domain::MoneyFinances,
    Domain::SchoolLearning,
    Domain::SpiritualityReligion,
    Domain::RecreationLeisure,
    Domain::TravelNature,
    Domain::CreativityArt,
    Domain::CommunitySocietyPolitics,
    Domain::TechnologyMediaInternet,
    Domain::SelfGrowthHabits,
];

impl Domain {
    /// All 18 domains in taxonomy order.
    #[must_use]
    pub fn all() -> [Domain; 18] {
        ALL_DOMAINS
    }

    /// Canonical display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ExerciseFitness => "Exercise/Fitness",
            Self::Family => "Family",
            Self::Friends => "Friends",
            Self::Relationships => "Relationships/Marriage/Partnership",
            Self::LoveRomance => "Love/Romance",
            Self::FoodEating => "Food/Eating",
            Self::SleepRest => "Sleep/Rest",
            Self::HealthMedical => "Health/Medical",
            Self::WorkCareer => "Work/Career",
            Self::MoneyFinances => "Money/Finances",
            Self::SchoolLearning => "School/Learning",
            Self::SpiritualityReligion => "Spirituality/Religion",
            Self::RecreationLeisure => "Recreation/Leisure",
            Self::TravelNature => "Travel/Nature",
            Self::CreativityArt => "Creativity/Art",
            Self::CommunitySocietyPolitics => "Community/Society/Politics",
            Self::TechnologyMediaInternet => "Technology/Media/Internet",
            Self::SelfGrowthHabits => "Self/Growth/Habits",
        }
    }

    /// Position in taxonomy order.
    pub(crate) fn index(self) -> usize {
        ALL_DOMAINS
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default()
    }

    /// Parse a case-insensitive domain name.
    ///
    /// Accepts the canonical slash-joined labels and the common single-word
    /// aliases ("work", "fitness", "money", …).
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UnknownDomain`] for names outside the
    /// taxonomy.
    pub fn from_name(name: &str) -> Result<Self> {
        let key = name.trim().to_ascii_lowercase();
        let domain = match key.as_str() {
            "exercise/fitness" | "exercise" | "fitness" | "workout" => Self::ExerciseFitness,
            "family" => Self::Family,
            "friends" | "friendship" => Self::Friends,
            "relationships/marriage/partnership" | "relationships" | "relationship"
            | "marriage" | "partnership" => Self::Relationships,
            "love/romance" | "love" | "romance" => Self::LoveRomance,
            "food/eating" | "food" | "eating" => Self::FoodEating,
            "sleep/rest" | "sleep" | "rest" => Self::SleepRest,
            "health/medical" | "health" | "medical" => Self::HealthMedical,
            "work/career" | "work" | "career" => Self::WorkCareer,
            "money/finances" | "money" | "finances" | "finance" => Self::MoneyFinances,
            "school/learning" | "school" | "learning" => Self::SchoolLearning,
            "spirituality/religion" | "spirituality" | "religion" => Self::SpiritualityReligion,
            "recreation/leisure" | "recreation" | "leisure" => Self::RecreationLeisure,
            "travel/nature" | "travel" | "nature" => Self::TravelNature,
            "creativity/art" | "creativity" | "art" => Self::CreativityArt,
            "community/society/politics" | "community" | "society" | "politics" => {
                Self::CommunitySocietyPolitics
            }
            "technology/media/internet" | "technology" | "media" | "internet" => {
                Self::TechnologyMediaInternet
            }
            "self/growth/habits" | "self" | "growth" | "habits" => Self::SelfGrowthHabits,
            _ => return Err(ClassifyError::UnknownDomain(key)),
        };
        Ok(domain)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-negative score accumulator over the 18 domains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainScores {
    values: [f64; 18],
}

impl DomainScores {
    /// Current accumulated score for a domain.
    #[must_use]
    pub fn get(&self, domain: Domain) -> f64 {
        self.values[domain.index()]
    }

    /// Add to a domain's accumulator, clamping at zero from below.
    pub fn add(&mut self, domain: Domain, delta: f64) {
        let i = domain.index();
        self.values[i] = (self.values[i] + delta).max(0.0);
    }

    /// Zero a domain's accumulator (hard-override suppression).
    pub fn suppress(&mut self, domain: Domain) {
        self.values[domain.index()] = 0.0;
    }

    /// Merge another accumulator into this one, scaling it by `weight`.
    pub fn merge_weighted(&mut self, other: &DomainScores, weight: f64) {
        for i in 0..self.values.len() {
            self.values[i] += other.values[i] * weight;
        }
    }

    /// Scores at/above `min_report`, rounded to 2 decimals, ranked
    /// descending with taxonomy-order tie-breaking.
    #[must_use]
    pub fn ranked(&self, min_report: f64) -> Vec<(Domain, f64)> {
        let mut out: Vec<(Domain, f64)> = ALL_DOMAINS
            .iter()
            .map(|&d| (d, (self.get(d) * 100.0).round() / 100.0))
            .filter(|(_, s)| *s >= min_report)
            .collect();
        out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        out
    }
}

/// Result of domain classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReading {
    /// Domains at/above the report threshold, ranked descending.
    pub ranked: Vec<(Domain, f64)>,
    /// Highest-scored domain, or `None` when nothing cleared the threshold.
    pub primary: Option<Domain>,
}

impl DomainReading {
    /// Normalize into the shared output contract. An empty ranking surfaces
    /// [`GENERAL_LABEL`] as both label and primary.
    #[must_use]
    pub fn to_output(&self) -> AnalyzerOutput {
        let primary = self
            .primary
            .map_or_else(|| GENERAL_LABEL.to_owned(), |d| d.label().to_owned());
        AnalyzerOutput {
            label: primary.clone(),
            id: None,
            ranked: self
                .ranked
                .iter()
                .map(|(d, s)| (d.label().to_owned(), *s))
                .collect(),
            primary,
        }
    }
}

// ── Normalized output ───────────────────────────────────────────────

/// Normalized classifier output shared by the emotion and domain sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerOutput {
    /// Winning category label.
    pub label: String,
    /// Numeric id where the category set has one (emotions only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u8>,
    /// Reported categories ranked descending.
    pub ranked: Vec<(String, f64)>,
    /// Convenience primary label (equals `label` for emotions; may be
    /// [`GENERAL_LABEL`] for domains).
    pub primary: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn emotion_ids_are_stable() {
        assert_eq!(Emotion::Joy.id(), 1);
        assert_eq!(Emotion::Neutral.id(), 7);
        assert_eq!(Emotion::Mixed.id(), 8);
    }

    #[test]
    fn emotion_from_name_round_trip() {
        for emotion in Emotion::all() {
            let parsed = Emotion::from_name(emotion.label()).unwrap();
            assert_eq!(parsed, emotion);
            let parsed_lower = Emotion::from_name(&emotion.label().to_lowercase()).unwrap();
            assert_eq!(parsed_lower, emotion);
        }
    }

    #[test]
    fn emotion_from_name_rejects_unknown() {
        assert!(Emotion::from_name("rage").is_err());
        assert!(Emotion::from_name("").is_err());
    }

    #[test]
    fn scores_ignore_mixed() {
        let mut scores = EmotionScores::default();
        scores.add(Emotion::Mixed, 5.0);
        assert!(scores.is_all_zero());
        assert_eq!(scores.get(Emotion::Mixed), 0.0);
    }

    #[test]
    fn scores_can_go_negative() {
        let mut scores = EmotionScores::default();
        scores.add(Emotion::Joy, -2.0);
        assert!(scores.get(Emotion::Joy) < 0.0);
    }

    #[test]
    fn ranked_breaks_ties_by_id_order() {
        let mut scores = EmotionScores::default();
        scores.add(Emotion::Fear, 1.0);
        scores.add(Emotion::Sadness, 1.0);
        let ranked = scores.ranked();
        // Sadness (id 2) ranks before Fear (id 4) on equal score.
        assert_eq!(ranked[0].0, Emotion::Sadness);
        assert_eq!(ranked[1].0, Emotion::Fear);
    }

    #[test]
    fn domain_labels_cover_taxonomy() {
        assert_eq!(ALL_DOMAINS.len(), 18);
        for domain in ALL_DOMAINS {
            assert!(!domain.label().is_empty());
            assert_eq!(Domain::from_name(domain.label()).unwrap(), domain);
        }
    }

    #[test]
    fn domain_aliases_parse() {
        assert_eq!(Domain::from_name("work").unwrap(), Domain::WorkCareer);
        assert_eq!(Domain::from_name("Fitness").unwrap(), Domain::ExerciseFitness);
        assert_eq!(Domain::from_name("finance").unwrap(), Domain::MoneyFinances);
        assert!(Domain::from_name("astrology").is_err());
    }

    #[test]
    fn domain_scores_never_negative() {
        let mut scores = DomainScores::default();
        scores.add(Domain::WorkCareer, 2.0);
        scores.add(Domain::WorkCareer, -5.0);
        assert_eq!(scores.get(Domain::WorkCareer), 0.0);
    }

    #[test]
    fn domain_ranked_rounds_and_filters() {
        let mut scores = DomainScores::default();
        scores.add(Domain::WorkCareer, 2.456);
        scores.add(Domain::Family, 0.4);
        let ranked = scores.ranked(0.75);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, Domain::WorkCareer);
        assert!((ranked[0].1 - 2.46).abs() < 1e-9);
    }

    #[test]
    fn empty_domain_reading_surfaces_general() {
        let reading = DomainReading {
            ranked: Vec::new(),
            primary: None,
        };
        let out = reading.to_output();
        assert_eq!(out.primary, GENERAL_LABEL);
        assert!(out.ranked.is_empty());
        assert!(out.id.is_none());
    }

    #[test]
    fn emotion_reading_output_has_id() {
        let mut scores = EmotionScores::default();
        scores.add(Emotion::Fear, 2.0);
        let reading = EmotionReading {
            emotion: Emotion::Fear,
            scores,
        };
        let out = reading.to_output();
        assert_eq!(out.label, "Fear");
        assert_eq!(out.id, Some(4));
        assert_eq!(out.ranked[0].0, "Fear");
    }

    #[test]
    fn analyzer_output_serde_round_trip() {
        let out = AnalyzerOutput {
            label: "Work/Career".to_owned(),
            id: None,
            ranked: vec![("Work/Career".to_owned(), 3.25)],
            primary: "Work/Career".to_owned(),
        };
        let json = serde_json::to_string(&out).unwrap();
        let back: AnalyzerOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, out);
    }
}
