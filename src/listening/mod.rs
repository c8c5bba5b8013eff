//! Active-listening response engine.
//!
//! Produces one short reflective response per journal entry by walking a
//! fixed ladder of strategies and stopping at the first that yields text:
//!
//! 1. rule match against the hand-authored pattern table,
//! 2. recall of a recently remembered entry, rewritten to second person,
//! 3. a topical pool keyed by the strongest domain hint,
//! 4. an emotion pool keyed by the emotion hint,
//! 5. the generic pool,
//! 6. a fixed last-resort line.
//!
//! The engine is stateful on purpose: it remembers recent inputs for recall,
//! tracks which response families and variants it used lately, and counts
//! steps for the recall cooldown. All of that state is plain data owned by
//! the caller; there is no randomness, so a fresh engine fed the same
//! sequence of inputs always produces the same sequence of responses.

mod assemble;
mod pools;
mod recall;
mod rules;
mod variants;

use std::collections::VecDeque;

use tracing::debug;

use crate::config::{AnalysisConfig, EngineConfig};
use crate::error::Result;
use crate::input::AnalysisInput;
use crate::listening::assemble::{sanitize_echo, substitute, tidy, to_second_person, usable_capture};
use crate::listening::pools::{GENERIC_POOL, LAST_RESORT, RECALL_CARRIERS, domain_pool, emotion_pool};
use crate::listening::rules::{Rule, build_rules};
use crate::listening::variants::VariantPicker;
use crate::text::split_sentences;

/// Which strategy produced the last response. Useful for tests and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStage {
    RuleMatch,
    Recall,
    DomainFallback,
    EmotionFallback,
    GenericFallback,
    LastResort,
}

/// Stateful reflective-response generator.
///
/// One instance per journal or conversation thread. Create it once and feed
/// it entries in order; [`reset`](Self::reset) returns it to a blank state.
pub struct ListeningEngine {
    rules: Vec<Rule>,
    cfg: EngineConfig,
    picker: VariantPicker,
    /// Recent input snippets, oldest first. Feeds the recall stage.
    memory: VecDeque<String>,
    step: u64,
    last_recall: Option<u64>,
    last_stage: Option<ResponseStage>,
}

impl ListeningEngine {
    /// Engine with default tuning.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default().engine)
    }

    pub fn with_config(cfg: EngineConfig) -> Self {
        Self {
            rules: build_rules(),
            picker: VariantPicker::new(&cfg),
            memory: VecDeque::new(),
            step: 0,
            last_recall: None,
            last_stage: None,
            cfg,
        }
    }

    /// Produce a reflective response for one entry.
    ///
    /// Returns `Ok(None)` for empty or whitespace-only input; that case does
    /// not advance the engine's state. Every produced response updates the
    /// recall memory and the repetition history.
    ///
    /// # Errors
    /// Returns [`ClassifyError::Selection`](crate::error::ClassifyError) if
    /// the input carries an invalid selection range.
    pub fn respond(&mut self, input: &AnalysisInput) -> Result<Option<String>> {
        let text = input.effective_text()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        self.step += 1;

        if let Some((response, family)) = self.rule_response(trimmed) {
            return Ok(Some(self.commit(trimmed, response, family, ResponseStage::RuleMatch)));
        }
        if let Some(response) = self.recall_response() {
            let family = "recall".to_string();
            return Ok(Some(self.commit(trimmed, response, family, ResponseStage::Recall)));
        }
        if let Some((domain, strength)) = input.strongest_domain_hint()
            && strength >= self.cfg.domain_hint_threshold
        {
            let family = format!("domain:{}", domain.label());
            if self.picker.can_use_family(&family) {
                let pool = domain_pool(domain);
                let index = self.picker.choose(&family, pool);
                let response = pool[index].to_string();
                return Ok(Some(self.commit(trimmed, response, family, ResponseStage::DomainFallback)));
            }
        }
        if let Some(emotion) = input.emotion_hint {
            let family = format!("emotion:{}", emotion.label().to_lowercase());
            if self.picker.can_use_family(&family) {
                let pool = emotion_pool(emotion);
                let index = self.picker.choose(&family, pool);
                let response = pool[index].to_string();
                return Ok(Some(self.commit(trimmed, response, family, ResponseStage::EmotionFallback)));
            }
        }
        if self.picker.can_use_family("generic") {
            let index = self.picker.choose("generic", GENERIC_POOL);
            let response = GENERIC_POOL[index].to_string();
            let family = "generic".to_string();
            return Ok(Some(self.commit(trimmed, response, family, ResponseStage::GenericFallback)));
        }
        let family = "last-resort".to_string();
        Ok(Some(self.commit(trimmed, LAST_RESORT.to_string(), family, ResponseStage::LastResort)))
    }

    /// Which stage produced the most recent response, if any.
    pub fn last_stage(&self) -> Option<ResponseStage> {
        self.last_stage
    }

    /// Forget all memory, rotation history, and counters.
    pub fn reset(&mut self) {
        self.picker.reset();
        self.memory.clear();
        self.step = 0;
        self.last_recall = None;
        self.last_stage = None;
    }

    /// Best rule-based response for the newest sentence that matches anything.
    ///
    /// Sentences are scanned newest-first and the scan stops at the first
    /// sentence with at least one match. Within that sentence every rule
    /// competes; score is weight plus specificity, plus a bonus when the
    /// sentence is the newest one. Ties keep the earlier rule in table order.
    fn rule_response(&mut self, text: &str) -> Option<(String, String)> {
        let sentences = split_sentences(text);
        for (age, sentence) in sentences.iter().rev().enumerate() {
            let lower = sentence.to_lowercase();
            let mut best: Option<(i32, usize, Option<String>)> = None;
            for (index, rule) in self.rules.iter().enumerate() {
                let Some(caps) = rule.pattern.captures(&lower) else {
                    continue;
                };
                let capture = caps
                    .get(1)
                    .and_then(|m| usable_capture(m.as_str(), self.cfg.min_capture_chars));
                let mut score = rule.weight + rule.specificity;
                if age == 0 {
                    score += self.cfg.rule_recency_bonus;
                }
                if best.as_ref().is_none_or(|(top, _, _)| score > *top) {
                    best = Some((score, index, capture));
                }
            }
            let Some((score, index, capture)) = best else {
                continue;
            };
            let rule = &self.rules[index];
            let options: Vec<&str> = rule
                .variants
                .iter()
                .filter(|(_, needs_capture)| !needs_capture || capture.is_some())
                .map(|(template, _)| *template)
                .collect();
            // Every rule carries a capture-free variant, so options is never empty.
            let family = format!("rule:{}", rule.key);
            let chosen = self.picker.choose(&family, &options);
            let template = options[chosen];
            let assembled = match &capture {
                Some(capture) => substitute(template, &to_second_person(capture)),
                None => template.to_string(),
            };
            debug!(rule = rule.key, score, capture = capture.is_some(), "rule matched");
            return Some((tidy(&sanitize_echo(&assembled)), family));
        }
        None
    }

    /// Reflect the most recent remembered input, if recall is due and the
    /// snippet qualifies.
    fn recall_response(&mut self) -> Option<String> {
        let since = self.step.saturating_sub(self.last_recall.unwrap_or(0));
        if since < self.cfg.recall_min_gap {
            return None;
        }
        let snippet = self.memory.back()?;
        if !recall::eligible(snippet, &self.cfg) {
            return None;
        }
        let reflected = recall::reflect(snippet);
        let index = self.picker.choose("recall", RECALL_CARRIERS);
        let response = tidy(&RECALL_CARRIERS[index].replace("{}", &reflected));
        self.last_recall = Some(self.step);
        Some(response)
    }

    /// Record a produced response and return it.
    fn commit(
        &mut self,
        snippet: &str,
        response: String,
        family: String,
        stage: ResponseStage,
    ) -> String {
        self.picker.record(&family, &response);
        self.memory.push_back(snippet.to_string());
        while self.memory.len() > self.cfg.memory_cap {
            self.memory.pop_front();
        }
        self.last_stage = Some(stage);
        debug!(?stage, family = %family, "listening response committed");
        response
    }
}

impl Default for ListeningEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
