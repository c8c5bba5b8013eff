//! Lexicon and pattern store shared by both classifiers.
//!
//! Built once at startup from the compiled-in tables, optionally extended by
//! a JSON overlay file. Term lookup is two-step: the raw token first, then
//! its light stem, so inflected forms converge on the same entries. Built-in
//! regex patterns are fixed data; a compile failure there is a programmer
//! error surfaced by the table tests, so construction panics rather than
//! returning `Result`.

mod domain_terms;
mod emotion_terms;
mod overlay;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::debug;

use crate::outcome::{Domain, Emotion};
use crate::text::light_stem;

/// Effect of a domain phrase match on a sentence's accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhraseEffect {
    /// Add `units * phrase_weight` to the domain.
    Boost(Domain, f64),
    /// Zero the domain's sentence score, applied after keyword accumulation.
    Suppress(Domain),
}

/// A compiled emotion phrase rule with its score bumps.
#[derive(Debug, Clone)]
pub struct EmotionPhrase {
    pub pattern: Regex,
    pub bumps: Vec<(Emotion, f64)>,
}

/// A compiled domain phrase rule with its accumulator effects.
#[derive(Debug, Clone)]
pub struct DomainPhrase {
    pub pattern: Regex,
    pub effects: Vec<PhraseEffect>,
}

/// All lexical knowledge used by the classifiers.
pub struct Lexicons {
    emotion_terms: HashMap<String, Vec<(Emotion, f64)>>,
    neutral_anchors: HashSet<String>,
    emotion_phrases: Vec<EmotionPhrase>,
    domain_terms: HashMap<String, Vec<(Domain, f64)>>,
    domain_phrases: Vec<DomainPhrase>,
    emoji: Vec<(String, Emotion)>,
    negators: HashSet<String>,
    intensifiers: HashSet<String>,
    dampeners: HashSet<String>,
    kinship: HashSet<String>,
    spouse: HashSet<String>,
}

impl Lexicons {
    /// Build the store from the compiled-in tables only.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern fails to compile. The tables are fixed
    /// data, so this is an assertion failure covered by tests, not a
    /// runtime condition.
    #[must_use]
    pub fn builtin() -> Self {
        let mut lex = Self {
            emotion_terms: HashMap::new(),
            neutral_anchors: HashSet::new(),
            emotion_phrases: Vec::new(),
            domain_terms: HashMap::new(),
            domain_phrases: Vec::new(),
            emoji: Vec::new(),
            negators: HashSet::new(),
            intensifiers: HashSet::new(),
            dampeners: HashSet::new(),
            kinship: HashSet::new(),
            spouse: HashSet::new(),
        };

        for &(emotion, weight, terms) in emotion_terms::EMOTION_TERMS {
            for term in terms {
                lex.insert_emotion_term(term, emotion, weight);
            }
        }
        for term in emotion_terms::NEUTRAL_ANCHORS {
            insert_with_stem(&mut lex.neutral_anchors, term);
        }
        for &(source, bumps) in emotion_terms::EMOTION_PHRASES {
            lex.emotion_phrases.push(EmotionPhrase {
                pattern: compile_builtin(source),
                bumps: bumps.to_vec(),
            });
        }
        for &(emoji, emotion) in emotion_terms::EMOJI_TABLE {
            lex.emoji.push((emoji.to_owned(), emotion));
        }
        lex.negators = owned_set(emotion_terms::NEGATORS);
        lex.intensifiers = owned_set(emotion_terms::INTENSIFIERS);
        lex.dampeners = owned_set(emotion_terms::DAMPENERS);

        for &(domain, weight, terms) in domain_terms::DOMAIN_TERMS {
            for term in terms {
                lex.insert_domain_term(term, domain, weight);
            }
        }
        for &(source, effects) in domain_terms::DOMAIN_PHRASES {
            lex.domain_phrases.push(DomainPhrase {
                pattern: compile_builtin(source),
                effects: effects.to_vec(),
            });
        }
        for term in domain_terms::KINSHIP_TERMS {
            insert_with_stem(&mut lex.kinship, term);
        }
        for term in domain_terms::SPOUSE_TERMS {
            insert_with_stem(&mut lex.spouse, term);
        }

        lex
    }

    /// Build the store and merge an overlay file on top.
    ///
    /// A missing file is not an error; a malformed one is logged and
    /// skipped, leaving the built-in tables untouched.
    #[must_use]
    pub fn with_overlay(path: impl AsRef<Path>) -> Self {
        let mut lex = Self::builtin();
        let path = path.as_ref();
        if path.exists() {
            overlay::apply(&mut lex, path);
        } else {
            debug!(path = %path.display(), "no lexicon overlay present");
        }
        lex
    }

    // ── Lookups ─────────────────────────────────────────────────────

    /// Emotion bumps for a token, trying the raw form then its stem.
    #[must_use]
    pub fn emotion_hits(&self, token: &str) -> Option<&[(Emotion, f64)]> {
        self.emotion_terms
            .get(token)
            .or_else(|| self.emotion_terms.get(light_stem(token)))
            .map(Vec::as_slice)
    }

    /// Domain bumps for a token, trying the raw form then its stem.
    #[must_use]
    pub fn domain_hits(&self, token: &str) -> Option<&[(Domain, f64)]> {
        self.domain_terms
            .get(token)
            .or_else(|| self.domain_terms.get(light_stem(token)))
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_neutral_anchor(&self, token: &str) -> bool {
        self.neutral_anchors.contains(token) || self.neutral_anchors.contains(light_stem(token))
    }

    #[must_use]
    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
    }

    #[must_use]
    pub fn is_intensifier(&self, token: &str) -> bool {
        self.intensifiers.contains(token)
    }

    #[must_use]
    pub fn is_dampener(&self, token: &str) -> bool {
        self.dampeners.contains(token)
    }

    #[must_use]
    pub fn is_kinship(&self, token: &str) -> bool {
        self.kinship.contains(token) || self.kinship.contains(light_stem(token))
    }

    #[must_use]
    pub fn is_spouse(&self, token: &str) -> bool {
        self.spouse.contains(token) || self.spouse.contains(light_stem(token))
    }

    #[must_use]
    pub fn emotion_phrases(&self) -> &[EmotionPhrase] {
        &self.emotion_phrases
    }

    #[must_use]
    pub fn domain_phrases(&self) -> &[DomainPhrase] {
        &self.domain_phrases
    }

    #[must_use]
    pub fn emoji(&self) -> &[(String, Emotion)] {
        &self.emoji
    }

    // ── Construction internals ──────────────────────────────────────

    fn insert_emotion_term(&mut self, term: &str, emotion: Emotion, weight: f64) {
        push_unique(self.emotion_terms.entry(term.to_owned()).or_default(), (emotion, weight));
        let stem = light_stem(term);
        if stem != term {
            push_unique(self.emotion_terms.entry(stem.to_owned()).or_default(), (emotion, weight));
        }
    }

    fn insert_domain_term(&mut self, term: &str, domain: Domain, weight: f64) {
        push_unique(self.domain_terms.entry(term.to_owned()).or_default(), (domain, weight));
        let stem = light_stem(term);
        if stem != term {
            push_unique(self.domain_terms.entry(stem.to_owned()).or_default(), (domain, weight));
        }
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Process-wide built-in store backing the module-level `classify` helpers.
///
/// Built on first use and shared from then on; overlay-aware callers
/// construct their own [`Lexicons`] instead.
#[must_use]
pub fn shared() -> Arc<Lexicons> {
    static SHARED: OnceLock<Arc<Lexicons>> = OnceLock::new();
    Arc::clone(SHARED.get_or_init(|| Arc::new(Lexicons::builtin())))
}

impl std::fmt::Debug for Lexicons {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicons")
            .field("emotion_terms", &self.emotion_terms.len())
            .field("domain_terms", &self.domain_terms.len())
            .field("emotion_phrases", &self.emotion_phrases.len())
            .field("domain_phrases", &self.domain_phrases.len())
            .finish_non_exhaustive()
    }
}

fn compile_builtin(source: &str) -> Regex {
    #[allow(clippy::expect_used)]
    Regex::new(source).expect("built-in pattern must compile")
}

fn owned_set(terms: &[&str]) -> HashSet<String> {
    terms.iter().map(|t| (*t).to_owned()).collect()
}

fn insert_with_stem(set: &mut HashSet<String>, term: &str) {
    set.insert(term.to_owned());
    let stem = light_stem(term);
    if stem != term {
        set.insert(stem.to_owned());
    }
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}
