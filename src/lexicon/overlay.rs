//! JSON lexicon overlay, merged additively over the built-in tables.
//!
//! Every failure mode degrades to "use the built-ins": an unreadable file,
//! malformed JSON, unknown category names, and uncompilable patterns are
//! each logged and skipped. The overlay can only add; it never removes or
//! reweights built-in entries.

use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use super::{DomainPhrase, EmotionPhrase, Lexicons, PhraseEffect};
use crate::outcome::{Domain, Emotion};

/// On-disk overlay shape. All keys optional. Category names use the same
/// spellings as [`Emotion::from_name`] and [`Domain::from_name`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OverlayDoc {
    emotions: BTreeMap<String, Vec<String>>,
    domains: BTreeMap<String, Vec<String>>,
    negators: Vec<String>,
    intensifiers: Vec<String>,
    dampeners: Vec<String>,
    emotion_phrases: Vec<OverlayEmotionPhrase>,
    domain_phrases: Vec<OverlayDomainPhrase>,
}

#[derive(Debug, Deserialize)]
struct OverlayEmotionPhrase {
    pattern: String,
    emotion: String,
    #[serde(default = "default_unit")]
    weight: f64,
}

#[derive(Debug, Deserialize)]
struct OverlayDomainPhrase {
    pattern: String,
    domain: String,
    #[serde(default = "default_unit")]
    units: f64,
}

fn default_unit() -> f64 {
    1.0
}

/// Merge the overlay at `path` into `lex`.
pub(super) fn apply(lex: &mut Lexicons, path: &Path) {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), %err, "lexicon overlay unreadable, using built-ins");
            return;
        }
    };
    let doc: OverlayDoc = match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(path = %path.display(), %err, "lexicon overlay malformed, using built-ins");
            return;
        }
    };

    let mut terms = 0usize;
    let mut phrases = 0usize;

    for (name, words) in &doc.emotions {
        match Emotion::from_name(name) {
            Ok(Emotion::Mixed) => {
                warn!(category = %name, "overlay cannot add terms to the derived mixed class");
            }
            Ok(Emotion::Neutral) => {
                for word in words {
                    super::insert_with_stem(&mut lex.neutral_anchors, &word.to_lowercase());
                    terms += 1;
                }
            }
            Ok(emotion) => {
                for word in words {
                    lex.insert_emotion_term(&word.to_lowercase(), emotion, 1.0);
                    terms += 1;
                }
            }
            Err(_) => warn!(category = %name, "overlay names unknown emotion, skipping"),
        }
    }

    for (name, words) in &doc.domains {
        match Domain::from_name(name) {
            Ok(domain) => {
                for word in words {
                    lex.insert_domain_term(&word.to_lowercase(), domain, 1.0);
                    terms += 1;
                }
            }
            Err(_) => warn!(category = %name, "overlay names unknown domain, skipping"),
        }
    }

    for word in &doc.negators {
        lex.negators.insert(word.to_lowercase());
        terms += 1;
    }
    for word in &doc.intensifiers {
        lex.intensifiers.insert(word.to_lowercase());
        terms += 1;
    }
    for word in &doc.dampeners {
        lex.dampeners.insert(word.to_lowercase());
        terms += 1;
    }

    for entry in &doc.emotion_phrases {
        let Ok(emotion) = Emotion::from_name(&entry.emotion) else {
            warn!(category = %entry.emotion, "overlay phrase names unknown emotion, skipping");
            continue;
        };
        match Regex::new(&entry.pattern) {
            Ok(pattern) => {
                lex.emotion_phrases.push(EmotionPhrase {
                    pattern,
                    bumps: vec![(emotion, entry.weight)],
                });
                phrases += 1;
            }
            Err(err) => {
                warn!(pattern = %entry.pattern, %err, "overlay emotion phrase does not compile, skipping");
            }
        }
    }

    for entry in &doc.domain_phrases {
        let Ok(domain) = Domain::from_name(&entry.domain) else {
            warn!(category = %entry.domain, "overlay phrase names unknown domain, skipping");
            continue;
        };
        match Regex::new(&entry.pattern) {
            Ok(pattern) => {
                lex.domain_phrases.push(DomainPhrase {
                    pattern,
                    effects: vec![PhraseEffect::Boost(domain, entry.units)],
                });
                phrases += 1;
            }
            Err(err) => {
                warn!(pattern = %entry.pattern, %err, "overlay domain phrase does not compile, skipping");
            }
        }
    }

    info!(
        path = %path.display(),
        terms,
        phrases,
        "applied lexicon overlay"
    );
}
