//! Variant rotation and repetition avoidance for response selection.
//!
//! Every response pool (rule templates, recall carriers, fallback pools) is an
//! ordered list of candidate strings. [`VariantPicker`] chooses which candidate
//! to emit while steering away from recently used entries, so that repeated
//! similar inputs cycle through the pool instead of echoing the same line.
//!
//! Three bounded histories drive the decision:
//! - per-key index history: which variant indices a given pool key used lately,
//! - family history: which response families (rule, recall, each fallback pool)
//!   produced the last few responses,
//! - global response history: the literal text of recent responses, used for a
//!   similarity check against the most recent one.
//!
//! Selection is fully deterministic. The same history and the same options
//! always yield the same choice.

use std::collections::{HashMap, VecDeque};

use crate::config::EngineConfig;

/// Deterministic variant selector with bounded repetition history.
#[derive(Debug)]
pub struct VariantPicker {
    /// Recently chosen variant indices, per pool key.
    recent_indices: HashMap<String, VecDeque<usize>>,
    /// Family keys of recent responses, oldest first.
    recent_families: VecDeque<String>,
    /// Text of recent responses, oldest first.
    recent_responses: VecDeque<String>,
    variant_cooldown: usize,
    family_window: usize,
    history_cap: usize,
    similarity_threshold: f64,
}

impl VariantPicker {
    pub fn new(cfg: &EngineConfig) -> Self {
        Self {
            recent_indices: HashMap::new(),
            recent_families: VecDeque::new(),
            recent_responses: VecDeque::new(),
            variant_cooldown: cfg.variant_cooldown,
            family_window: cfg.family_window,
            history_cap: cfg.response_history_cap,
            similarity_threshold: cfg.similarity_threshold,
        }
    }

    /// Choose one entry from `options` for the pool identified by `key`.
    ///
    /// Scans options in order and returns the first index that is neither in
    /// the key's recent-index window nor too similar to the most recently
    /// emitted response. When every option is blocked this falls back to
    /// index 0, so a non-empty pool always yields a response.
    ///
    /// The window never holds more than `options.len() - 1` indices, so a pool
    /// of size N cycles through all N entries indefinitely instead of locking
    /// onto the fallback once every index has been seen.
    ///
    /// The chosen index is recorded in the key's window before returning.
    pub fn choose(&mut self, key: &str, options: &[&str]) -> usize {
        debug_assert!(!options.is_empty(), "variant pool must not be empty");
        let depth = self.variant_cooldown.min(options.len().saturating_sub(1));
        let window = self.recent_indices.entry(key.to_string()).or_default();
        while window.len() > depth {
            window.pop_front();
        }
        let last_response = self.recent_responses.back();
        let mut chosen = 0;
        for (index, option) in options.iter().enumerate() {
            if window.contains(&index) {
                continue;
            }
            if let Some(last) = last_response
                && similarity(option, last) >= self.similarity_threshold
            {
                continue;
            }
            chosen = index;
            break;
        }
        window.push_back(chosen);
        while window.len() > depth {
            window.pop_front();
        }
        chosen
    }

    /// Whether `family` has stayed out of the last few responses.
    ///
    /// Fallback stages call this before drawing from their pool so one family
    /// of canned responses cannot dominate a stretch of turns.
    pub fn can_use_family(&self, family: &str) -> bool {
        let start = self.recent_families.len().saturating_sub(self.family_window);
        !self
            .recent_families
            .iter()
            .skip(start)
            .any(|used| used == family)
    }

    /// Record that a response from `family` was emitted with text `response`.
    pub fn record(&mut self, family: &str, response: &str) {
        self.recent_families.push_back(family.to_string());
        while self.recent_families.len() > self.history_cap {
            self.recent_families.pop_front();
        }
        self.recent_responses.push_back(response.to_string());
        while self.recent_responses.len() > self.history_cap {
            self.recent_responses.pop_front();
        }
    }

    /// Forget all rotation history.
    pub fn reset(&mut self) {
        self.recent_indices.clear();
        self.recent_families.clear();
        self.recent_responses.clear();
    }
}

/// Similarity of two strings in `0.0..=1.0`, via Jaccard overlap of word
/// bigrams. Strings too short to form a bigram compare by case-insensitive
/// equality instead.
fn similarity(a: &str, b: &str) -> f64 {
    let bigrams_a = word_bigrams(a);
    let bigrams_b = word_bigrams(b);
    if bigrams_a.is_empty() || bigrams_b.is_empty() {
        return if a.eq_ignore_ascii_case(b) { 1.0 } else { 0.0 };
    }
    let intersection = bigrams_a
        .iter()
        .filter(|bigram| bigrams_b.contains(bigram))
        .count();
    let union = bigrams_a.len() + bigrams_b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

fn word_bigrams(text: &str) -> Vec<(String, String)> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect();
    let mut bigrams: Vec<(String, String)> = words
        .windows(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();
    bigrams.sort();
    bigrams.dedup();
    bigrams
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn picker() -> VariantPicker {
        VariantPicker::new(&EngineConfig::default())
    }

    #[test]
    fn rotates_through_distinct_options_and_cycles() {
        let mut picker = picker();
        let options = [
            "How did that land for you?",
            "What was that like?",
            "Where do you feel that most?",
        ];
        assert_eq!(picker.choose("pool", &options), 0);
        assert_eq!(picker.choose("pool", &options), 1);
        assert_eq!(picker.choose("pool", &options), 2);
        // The window holds fewer indices than the pool, so rotation restarts.
        assert_eq!(picker.choose("pool", &options), 0);
        assert_eq!(picker.choose("pool", &options), 1);
    }

    #[test]
    fn two_entry_pool_alternates() {
        let mut picker = picker();
        let options = ["one here", "two here"];
        assert_eq!(picker.choose("pool", &options), 0);
        assert_eq!(picker.choose("pool", &options), 1);
        assert_eq!(picker.choose("pool", &options), 0);
        assert_eq!(picker.choose("pool", &options), 1);
    }

    #[test]
    fn fully_blocked_pool_falls_back_to_first_option() {
        let mut picker = picker();
        picker.record("generic", "That sounds really heavy to carry alone.");
        let options = [
            "That sounds really heavy to carry alone now.",
            "That sounds really heavy to carry alone today.",
        ];
        // Both options trip the similarity gate against the last response.
        assert_eq!(picker.choose("pool", &options), 0);
    }

    #[test]
    fn keys_keep_independent_windows() {
        let mut picker = picker();
        let options = ["shared text one", "shared text two"];
        assert_eq!(picker.choose("a", &options), 0);
        assert_eq!(picker.choose("b", &options), 0);
        assert_eq!(picker.choose("a", &options), 1);
    }

    #[test]
    fn skips_option_similar_to_last_response() {
        let mut picker = picker();
        picker.record("generic", "That sounds really heavy to carry alone.");
        let options = [
            "That sounds really heavy to carry alone right now.",
            "What part of this weighs on you most?",
        ];
        assert_eq!(picker.choose("pool", &options), 1);
    }

    #[test]
    fn family_window_blocks_recent_families_only() {
        let mut picker = picker();
        picker.record("emotion:fear", "a");
        assert!(!picker.can_use_family("emotion:fear"));
        assert!(picker.can_use_family("generic"));
        picker.record("generic", "b");
        picker.record("last-resort", "c");
        picker.record("last-resort", "d");
        picker.record("last-resort", "e");
        // emotion:fear has now aged out of the four-record window.
        assert!(picker.can_use_family("emotion:fear"));
    }

    #[test]
    fn short_strings_compare_by_equality() {
        assert!((similarity("Okay.", "Okay.") - 1.0).abs() < f64::EPSILON);
        assert!(similarity("Okay.", "Right.") < f64::EPSILON);
    }

    #[test]
    fn bigram_similarity_detects_shared_phrasing() {
        let a = "It sounds like work has been heavy lately";
        let b = "It sounds like work has been hard lately";
        assert!(similarity(a, b) > 0.4);
        let c = "Where does your energy go these days";
        assert!(similarity(a, c) < 0.1);
    }

    #[test]
    fn reset_clears_all_history() {
        let mut picker = picker();
        let options = ["alpha beta", "gamma delta"];
        picker.choose("pool", &options);
        picker.record("generic", "alpha beta");
        picker.reset();
        assert_eq!(picker.choose("pool", &options), 0);
        assert!(picker.can_use_family("generic"));
    }
}
