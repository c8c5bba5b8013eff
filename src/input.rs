//! Analysis request type shared by both classifiers and the listening
//! engine.

use std::ops::Range;

use crate::error::{ClassifyError, Result};
use crate::outcome::{Domain, Emotion};

/// One unit of text to analyze, with optional selection and caller hints.
///
/// The selection range is expressed in characters (not bytes) over the raw
/// text, half-open. Hints never replace classification; they bias it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    /// Raw entry text.
    pub text: String,
    /// Optional char-offset half-open sub-range to analyze instead of the
    /// whole text.
    pub selection: Option<Range<usize>>,
    /// Caller's prior belief about the emotion, if any.
    pub emotion_hint: Option<Emotion>,
    /// Caller's prior beliefs about domains with confidences in 0..=1.
    pub domain_hints: Vec<(Domain, f64)>,
}

impl AnalysisInput {
    /// Wrap raw text with no selection and no hints.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: None,
            emotion_hint: None,
            domain_hints: Vec::new(),
        }
    }

    /// Restrict analysis to a char-offset half-open range of the text.
    #[must_use]
    pub fn with_selection(mut self, range: Range<usize>) -> Self {
        self.selection = Some(range);
        self
    }

    /// Attach an emotion hint.
    #[must_use]
    pub fn with_emotion_hint(mut self, emotion: Emotion) -> Self {
        self.emotion_hint = Some(emotion);
        self
    }

    /// Attach an emotion hint by name.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UnknownEmotion`] when the name falls outside
    /// the 8-class set.
    pub fn with_emotion_hint_name(self, name: &str) -> Result<Self> {
        Ok(self.with_emotion_hint(Emotion::from_name(name)?))
    }

    /// Attach a domain hint. Confidence is clamped into 0..=1.
    #[must_use]
    pub fn with_domain_hint(mut self, domain: Domain, confidence: f64) -> Self {
        self.domain_hints.push((domain, confidence.clamp(0.0, 1.0)));
        self
    }

    /// Attach a domain hint by name.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UnknownDomain`] when the name falls outside
    /// the taxonomy.
    pub fn with_domain_hint_name(self, name: &str, confidence: f64) -> Result<Self> {
        Ok(self.with_domain_hint(Domain::from_name(name)?, confidence))
    }

    /// The text the pipeline actually analyzes: the selection slice when one
    /// is set, otherwise the whole text.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Selection`] when the range is reversed or
    /// extends past the end of the text.
    pub fn effective_text(&self) -> Result<&str> {
        let Some(range) = &self.selection else {
            return Ok(&self.text);
        };
        if range.start > range.end {
            return Err(ClassifyError::Selection(format!(
                "reversed range {}..{}",
                range.start, range.end
            )));
        }
        let total_chars = self.text.chars().count();
        if range.end > total_chars {
            return Err(ClassifyError::Selection(format!(
                "range {}..{} exceeds text length {total_chars}",
                range.start, range.end
            )));
        }
        let start_byte = char_to_byte(&self.text, range.start);
        let end_byte = char_to_byte(&self.text, range.end);
        Ok(&self.text[start_byte..end_byte])
    }

    /// The highest-confidence domain hint, if any. Ties keep the first
    /// attached hint.
    #[must_use]
    pub fn strongest_domain_hint(&self) -> Option<(Domain, f64)> {
        let mut best: Option<(Domain, f64)> = None;
        for &(domain, conf) in &self.domain_hints {
            match best {
                Some((_, held)) if conf <= held => {}
                _ => best = Some((domain, conf)),
            }
        }
        best
    }
}

/// Byte offset of the `char_index`-th character. `char_index` must be at
/// most the char count; equal maps to the end of the string.
fn char_to_byte(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(b, _)| b)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn effective_text_without_selection_is_whole() {
        let input = AnalysisInput::new("hello world");
        assert_eq!(input.effective_text().unwrap(), "hello world");
    }

    #[test]
    fn selection_slices_by_char_offset() {
        let input = AnalysisInput::new("hello world").with_selection(6..11);
        assert_eq!(input.effective_text().unwrap(), "world");
    }

    #[test]
    fn selection_handles_multibyte_text() {
        // "café " is 5 chars; slicing after it must not split the é byte pair.
        let input = AnalysisInput::new("café time").with_selection(5..9);
        assert_eq!(input.effective_text().unwrap(), "time");
    }

    #[test]
    fn reversed_selection_is_rejected() {
        let input = AnalysisInput::new("hello").with_selection(4..1);
        assert!(matches!(
            input.effective_text(),
            Err(ClassifyError::Selection(_))
        ));
    }

    #[test]
    fn out_of_bounds_selection_is_rejected() {
        let input = AnalysisInput::new("hello").with_selection(0..99);
        assert!(matches!(
            input.effective_text(),
            Err(ClassifyError::Selection(_))
        ));
    }

    #[test]
    fn empty_selection_yields_empty_text() {
        let input = AnalysisInput::new("hello").with_selection(2..2);
        assert_eq!(input.effective_text().unwrap(), "");
    }

    #[test]
    fn domain_hint_confidence_is_clamped() {
        let input = AnalysisInput::new("x").with_domain_hint(Domain::Family, 7.0);
        assert_eq!(input.domain_hints[0].1, 1.0);
    }

    #[test]
    fn strongest_hint_keeps_first_on_tie() {
        let input = AnalysisInput::new("x")
            .with_domain_hint(Domain::Family, 0.5)
            .with_domain_hint(Domain::WorkCareer, 0.5);
        assert_eq!(
            input.strongest_domain_hint(),
            Some((Domain::Family, 0.5))
        );
    }

    #[test]
    fn hint_names_validate_at_boundary() {
        assert!(AnalysisInput::new("x").with_emotion_hint_name("joy").is_ok());
        assert!(AnalysisInput::new("x").with_emotion_hint_name("bliss").is_err());
        assert!(AnalysisInput::new("x").with_domain_hint_name("work", 0.8).is_ok());
        assert!(AnalysisInput::new("x").with_domain_hint_name("sports", 0.8).is_err());
    }
}
