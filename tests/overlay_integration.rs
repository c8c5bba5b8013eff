#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Lexicon overlay files changing end-to-end classification behavior.

use std::path::PathBuf;
use std::sync::Arc;

use inkling::lexicon::Lexicons;
use inkling::outcome::{Domain, Emotion};
use inkling::{DomainClassifier, EmotionClassifier};

fn write_overlay(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("lexicon_overlay.json");
    std::fs::write(&path, contents).expect("write overlay file");
    (dir, path)
}

#[test]
fn overlay_terms_change_classification_results() {
    let (_dir, path) = write_overlay(
        r#"{
            "emotions": { "joy": ["brightside"] },
            "domains": { "creativity/art": ["linocut"] }
        }"#,
    );

    let builtin = Arc::new(Lexicons::builtin());
    let merged = Arc::new(Lexicons::with_overlay(&path));

    let entry = "I am brightside about all of it";
    let before = EmotionClassifier::new(Arc::clone(&builtin)).classify_text(entry);
    assert_eq!(before.emotion, Emotion::Neutral);
    let after = EmotionClassifier::new(Arc::clone(&merged)).classify_text(entry);
    assert_eq!(after.emotion, Emotion::Joy);

    let entry = "The linocut print is coming along";
    let before = DomainClassifier::new(builtin).classify_text(entry);
    assert!(before.primary.is_none());
    let after = DomainClassifier::new(merged).classify_text(entry);
    assert_eq!(after.primary, Some(Domain::CreativityArt));
}

#[test]
fn overlay_phrase_lifts_an_unscored_entry() {
    let (_dir, path) = write_overlay(
        r#"{
            "emotion_phrases": [
                { "pattern": "\\bon\\s+cloud\\s+nine\\b", "emotion": "joy", "weight": 2.0 }
            ]
        }"#,
    );

    let entry = "Been on cloud nine since the call";
    let before = EmotionClassifier::new(Arc::new(Lexicons::builtin())).classify_text(entry);
    assert_eq!(before.emotion, Emotion::Neutral);

    let after =
        EmotionClassifier::new(Arc::new(Lexicons::with_overlay(&path))).classify_text(entry);
    assert_eq!(after.emotion, Emotion::Joy);
    assert!(after.scores.get(Emotion::Joy) >= 2.0);
}

#[test]
fn malformed_overlay_preserves_builtin_behavior() {
    let (_dir, path) = write_overlay("{ this is not json ]");

    let builtin = EmotionClassifier::new(Arc::new(Lexicons::builtin()));
    let merged = EmotionClassifier::new(Arc::new(Lexicons::with_overlay(&path)));

    for entry in ["I am so happy today", "I am not happy", "Went to the store for milk."] {
        let a = builtin.classify_text(entry);
        let b = merged.classify_text(entry);
        assert_eq!(a.emotion, b.emotion);
        assert_eq!(a.scores, b.scores);
    }
}

#[test]
fn missing_overlay_file_preserves_builtin_behavior() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let absent = dir.path().join("never_written.json");

    let builtin = DomainClassifier::new(Arc::new(Lexicons::builtin()));
    let merged = DomainClassifier::new(Arc::new(Lexicons::with_overlay(&absent)));

    let entry = "Talked to my mom about rent money";
    assert_eq!(builtin.classify_text(entry), merged.classify_text(entry));
}
