//! Inkling: deterministic on-device text analysis for journaling entries.
//!
//! This crate provides three cooperating analyzers over one lexicon store:
//! Entry text → tokenizer → {emotion, domain} classifiers → listening engine
//!
//! # Architecture
//!
//! The analyzers are pure over shared compiled-in tables:
//! - **Text**: sentence segmentation, tokenization, light stemming
//! - **Lexicon**: term/phrase tables plus an optional JSON overlay file
//! - **Signals**: negation, intensity, and contrast weighting
//! - **Emotion**: 7 scored classes with a derived Mixed reading
//! - **Domain**: 18 ranked life-topic classes with hard overrides
//! - **Listening**: stateful reflective-response engine with staged fallbacks
//!
//! Everything is rule-based and offline. The classify paths do no I/O; the
//! only file read is the optional lexicon overlay at construction time.
//! Identical inputs always produce identical outputs.

pub mod config;
pub mod domain;
pub mod emotion;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod listening;
pub mod outcome;
pub mod signals;
pub mod text;

pub use config::AnalysisConfig;
pub use domain::DomainClassifier;
pub use emotion::EmotionClassifier;
pub use error::{ClassifyError, Result};
pub use input::AnalysisInput;
pub use lexicon::Lexicons;
pub use listening::{ListeningEngine, ResponseStage};
pub use outcome::{AnalyzerOutput, Domain, DomainReading, Emotion, EmotionReading};
