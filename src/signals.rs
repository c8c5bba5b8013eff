//! Negation, intensity, contrast, and amplifier signal handling.
//!
//! These helpers are pure over their inputs; the emotion classifier decides
//! how to combine them. Negation is presence-based within the window (one
//! flip, never a double-negative cancel), while intensity modifiers
//! compound multiplicatively.

use crate::config::SignalConfig;
use crate::lexicon::Lexicons;
use crate::outcome::{Emotion, EmotionScores};

/// Contrast markers that promote the clause after them.
const CONTRAST_MARKERS: [&str; 3] = [" but ", " however ", " though "];

/// Multiplicative modifier for a lexicon hit at `index`, scanning the
/// configured window on both sides. A negator anywhere in the window flips
/// the sign once; each intensifier or dampener multiplies.
#[must_use]
pub fn modifier_factor(
    lex: &Lexicons,
    cfg: &SignalConfig,
    tokens: &[String],
    index: usize,
) -> f64 {
    let start = index.saturating_sub(cfg.modifier_window);
    let end = (index + cfg.modifier_window).min(tokens.len().saturating_sub(1));
    let mut factor = 1.0;
    let mut negated = false;
    for (i, token) in tokens.iter().enumerate().take(end + 1).skip(start) {
        if i == index {
            continue;
        }
        if lex.is_negator(token) {
            negated = true;
        } else if lex.is_intensifier(token) {
            factor *= cfg.intensifier_factor;
        } else if lex.is_dampener(token) {
            factor *= cfg.dampener_factor;
        }
    }
    if negated { -factor } else { factor }
}

/// Split a sentence into clauses around contrast markers. The second tuple
/// field is true for the prioritized clause (the one after the last
/// marker); a sentence without markers comes back as one unprioritized
/// clause.
#[must_use]
pub fn split_contrast(text: &str) -> Vec<(&str, bool)> {
    let mut raw = Vec::new();
    let mut rest = text;
    loop {
        let next = CONTRAST_MARKERS
            .iter()
            .filter_map(|m| rest.find(m).map(|i| (i, m.len())))
            .min_by_key(|&(i, _)| i);
        match next {
            Some((i, len)) => {
                raw.push(&rest[..i]);
                rest = &rest[i + len..];
            }
            None => {
                raw.push(rest);
                break;
            }
        }
    }
    let mut clauses: Vec<(&str, bool)> = raw
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| (c, false))
        .collect();
    if clauses.len() > 1 {
        if let Some(last) = clauses.last_mut() {
            last.1 = true;
        }
    }
    clauses
}

/// Apply whole-text amplifiers over already-accumulated scores: emoji adds,
/// exclamation bonus, ALL-CAPS boost. Runs on the original-case text so
/// capitalization survives.
pub fn apply_amplifiers(
    lex: &Lexicons,
    cfg: &SignalConfig,
    text: &str,
    scores: &mut EmotionScores,
) {
    for (emoji, emotion) in lex.emoji() {
        let count = text.matches(emoji.as_str()).count();
        if count > 0 {
            scores.add(*emotion, count as f64 * cfg.emoji_weight);
        }
    }

    let exclamations = text.matches('!').count();
    if exclamations > 0 {
        if let Some(target) = exclamation_target(scores) {
            scores.add(target, exclamations as f64 * cfg.exclamation_bonus);
        }
    }

    let caps = text
        .split_whitespace()
        .filter(|w| is_shouted(w))
        .count();
    if caps > 0 {
        let (top, top_score) = scores.top();
        if top_score > 0.0 {
            scores.add(top, caps as f64 * cfg.caps_bonus);
        }
    }
}

/// Exclamations prefer Joy, then Surprise, then the current leader. With
/// nothing scored yet there is no target; bare "!!!" stays Neutral.
fn exclamation_target(scores: &EmotionScores) -> Option<Emotion> {
    if scores.get(Emotion::Joy) > 0.0 {
        return Some(Emotion::Joy);
    }
    if scores.get(Emotion::Surprise) > 0.0 {
        return Some(Emotion::Surprise);
    }
    let (top, top_score) = scores.top();
    (top_score > 0.0).then_some(top)
}

/// ALL-CAPS heuristic: more than two alphabetic characters, all uppercase,
/// and not a URL.
fn is_shouted(word: &str) -> bool {
    let lower = word.to_lowercase();
    if lower.contains("http") || lower.contains("www.") {
        return false;
    }
    let alpha: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    alpha.len() > 2 && alpha.iter().all(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    fn lex() -> Lexicons {
        Lexicons::builtin()
    }

    #[test]
    fn negator_in_window_flips_sign() {
        let tokens = toks(&["not", "happy"]);
        let f = modifier_factor(&lex(), &SignalConfig::default(), &tokens, 1);
        assert!((f + 1.0).abs() < 1e-9);
    }

    #[test]
    fn negator_outside_window_is_ignored() {
        let tokens = toks(&["not", "a", "b", "c", "d", "happy"]);
        let f = modifier_factor(&lex(), &SignalConfig::default(), &tokens, 5);
        assert!((f - 1.0).abs() < 1e-9);
    }

    #[test]
    fn double_negation_flips_once() {
        let tokens = toks(&["not", "never", "happy"]);
        let f = modifier_factor(&lex(), &SignalConfig::default(), &tokens, 2);
        assert!(f < 0.0);
        assert!((f + 1.0).abs() < 1e-9);
    }

    #[test]
    fn intensifiers_compound() {
        let cfg = SignalConfig::default();
        let tokens = toks(&["really", "really", "happy"]);
        let f = modifier_factor(&lex(), &cfg, &tokens, 2);
        let expected = cfg.intensifier_factor * cfg.intensifier_factor;
        assert!((f - expected).abs() < 1e-9);
    }

    #[test]
    fn dampener_and_negator_combine() {
        let cfg = SignalConfig::default();
        let tokens = toks(&["not", "a_bit", "happy"]);
        let f = modifier_factor(&lex(), &cfg, &tokens, 2);
        assert!((f + cfg.dampener_factor).abs() < 1e-9);
    }

    #[test]
    fn contrast_promotes_final_clause() {
        let clauses = split_contrast("i was happy but now i am afraid");
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0], ("i was happy", false));
        assert_eq!(clauses[1], ("now i am afraid", true));
    }

    #[test]
    fn later_marker_wins() {
        let clauses = split_contrast("good day but tired though still grateful");
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[2], ("still grateful", true));
        assert!(!clauses[0].1);
        assert!(!clauses[1].1);
    }

    #[test]
    fn no_marker_yields_single_unprioritized_clause() {
        let clauses = split_contrast("a quiet evening");
        assert_eq!(clauses, vec![("a quiet evening", false)]);
    }

    #[test]
    fn exclamations_prefer_joy_then_surprise() {
        let cfg = SignalConfig::default();
        let mut scores = EmotionScores::default();
        scores.add(Emotion::Joy, 1.0);
        scores.add(Emotion::Surprise, 2.0);
        apply_amplifiers(&lex(), &cfg, "what a day!!", &mut scores);
        assert!((scores.get(Emotion::Joy) - (1.0 + 2.0 * cfg.exclamation_bonus)).abs() < 1e-9);

        let mut scores = EmotionScores::default();
        scores.add(Emotion::Surprise, 2.0);
        apply_amplifiers(&lex(), &cfg, "no way!", &mut scores);
        assert!((scores.get(Emotion::Surprise) - (2.0 + cfg.exclamation_bonus)).abs() < 1e-9);
    }

    #[test]
    fn bare_exclamations_have_no_target() {
        let mut scores = EmotionScores::default();
        apply_amplifiers(&lex(), &SignalConfig::default(), "!!!", &mut scores);
        assert!(scores.is_all_zero());
    }

    #[test]
    fn emoji_add_directly() {
        let cfg = SignalConfig::default();
        let mut scores = EmotionScores::default();
        apply_amplifiers(&lex(), &cfg, "rough one 😭", &mut scores);
        assert!((scores.get(Emotion::Sadness) - cfg.emoji_weight).abs() < 1e-9);
    }

    #[test]
    fn caps_boost_goes_to_leader() {
        let cfg = SignalConfig::default();
        let mut scores = EmotionScores::default();
        scores.add(Emotion::Anger, 2.0);
        apply_amplifiers(&lex(), &cfg, "I am DONE with this", &mut scores);
        assert!((scores.get(Emotion::Anger) - (2.0 + cfg.caps_bonus)).abs() < 1e-9);
    }

    #[test]
    fn urls_and_short_caps_do_not_shout() {
        assert!(!is_shouted("HTTPS://EXAMPLE.COM"));
        assert!(!is_shouted("OK"));
        assert!(is_shouted("DONE"));
        assert!(is_shouted("DONE!"));
    }
}
