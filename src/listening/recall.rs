//! Recall of previously stored input.
//!
//! The engine keeps a short memory of recent entries. When no rule matches,
//! it may reflect the most recent remembered snippet back to the writer,
//! rewritten into second person and wrapped in a carrier sentence. Recall is
//! deliberately rare: a step cooldown keeps it from firing on consecutive
//! turns, and only snippets that look like a reportable statement (bounded
//! length, at least one verb-like token) qualify.

use crate::config::EngineConfig;
use crate::listening::assemble::to_second_person;
use crate::text::tokenize;

/// Tokens that make a snippet read as a statement worth reflecting.
/// Joined forms match the tokenizer's output for phrasal verbs.
const VERB_HINTS: &[&str] = &[
    "was", "were", "am", "is", "are", "be", "been", "being", "feel", "feels", "felt", "feeling",
    "think", "thinks", "thought", "thinking", "want", "wants", "wanted", "need", "needs", "needed",
    "get", "gets", "got", "getting", "go", "goes", "going", "went", "keep", "keeps", "kept",
    "make", "makes", "made", "making", "try", "tried", "trying", "say", "said", "tell", "told",
    "know", "knows", "knew", "seem", "seems", "seemed", "have", "has", "had", "miss", "missed",
    "wish", "wished", "hope", "hoped", "love", "loved", "hate", "hated", "hurt", "hurts", "cry",
    "cried", "worry", "worried", "stressed", "cant", "cannot", "wont", "dont", "didnt", "couldnt",
    "freaked_out", "freaking_out", "worked_up", "broke_up", "burned_out", "burnt_out", "fed_up",
    "let_down", "laid_off", "hung_out", "blown_away",
];

/// Leading words that need a "that " bridge inside a carrier sentence.
const LEAD_BRIDGE: &[&str] = &[
    "yesterday", "today", "tonight", "this", "last", "lately", "earlier", "recently", "your",
];

/// Whether a remembered snippet qualifies for reflection.
pub(crate) fn eligible(snippet: &str, cfg: &EngineConfig) -> bool {
    let trimmed = snippet.trim();
    let chars = trimmed.chars().count();
    if chars < cfg.recall_min_chars || chars > cfg.recall_max_chars {
        return false;
    }
    tokenize(trimmed)
        .iter()
        .any(|token| VERB_HINTS.contains(&token.as_str()))
}

/// Rewrite a stored snippet for embedding in a carrier sentence.
///
/// Lowercases, converts to second person, strips terminal punctuation, and
/// bridges a leading temporal or possessive word with "that " so the carrier
/// reads as one sentence.
pub(crate) fn reflect(snippet: &str) -> String {
    let lowered = snippet.trim().to_lowercase();
    let converted = to_second_person(&lowered);
    let converted = converted
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .trim()
        .to_string();
    let first_word = converted.split_whitespace().next().unwrap_or("");
    if LEAD_BRIDGE.contains(&first_word) {
        format!("that {converted}")
    } else {
        converted
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn short_snippets_are_not_eligible() {
        let cfg = EngineConfig::default();
        assert!(!eligible("I slept.", &cfg));
    }

    #[test]
    fn overlong_snippets_are_not_eligible() {
        let cfg = EngineConfig::default();
        let long = "word ".repeat(60);
        assert!(!eligible(&long, &cfg));
    }

    #[test]
    fn statement_with_verb_is_eligible() {
        let cfg = EngineConfig::default();
        assert!(eligible("I was exhausted after the shift today", &cfg));
    }

    #[test]
    fn snippet_without_verb_hint_is_not_eligible() {
        let cfg = EngineConfig::default();
        assert!(!eligible("coffee with sarah downtown again", &cfg));
    }

    #[test]
    fn phrasal_verb_counts_through_the_tokenizer() {
        let cfg = EngineConfig::default();
        assert!(eligible("I completely freaked out about the interview", &cfg));
    }

    #[test]
    fn reflect_converts_person_and_strips_punctuation() {
        assert_eq!(
            reflect("I was proud of my progress."),
            "you were proud of your progress"
        );
    }

    #[test]
    fn reflect_bridges_leading_temporal_word() {
        assert_eq!(
            reflect("Today I skipped the gym"),
            "that today you skipped the gym"
        );
    }

    #[test]
    fn reflect_bridges_converted_possessive_lead() {
        assert_eq!(
            reflect("My sister finally called me back"),
            "that your sister finally called you back"
        );
    }
}
