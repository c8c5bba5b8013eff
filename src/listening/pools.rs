//! Canned response pools for the fallback stages and recall carriers.
//!
//! Every pool is an ordered list. Selection order is owned by
//! [`VariantPicker`](super::variants::VariantPicker); the lists here only
//! supply the text. Entries within a pool are phrased differently on purpose
//! so the similarity gate does not block rotation.

use crate::outcome::{Domain, Emotion};

/// Fixed closing line used when every other stage declines.
pub(crate) const LAST_RESORT: &str = "I'm here and listening. Tell me more when you're ready.";

/// Open prompts with no topical or emotional slant.
pub(crate) const GENERIC_POOL: &[&str] = &[
    "What part of this feels most important to sit with right now?",
    "Say a little more about that, whatever comes to mind.",
    "How long has this been on your mind?",
    "What would you want to be different about this?",
    "Where do you notice this showing up in your day?",
    "If a close friend described this to you, what would you tell them?",
];

/// Sentence frames that wrap a remembered snippet. `{}` marks the slot.
pub(crate) const RECALL_CARRIERS: &[&str] = &[
    "Earlier you mentioned {}. How is that sitting with you now?",
    "You wrote before about how {}. Is that still on your mind?",
    "Coming back to something you said, {}. Has anything shifted there?",
    "A little while ago you shared that {}. What feels true about it today?",
];

/// Reflective prompts keyed by the strongest topical signal.
pub(crate) fn domain_pool(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::ExerciseFitness => &[
            "Movement keeps coming up for you. What does your body get out of it?",
            "How do you feel in the hour after you train, compared to before?",
            "What's pulling you toward exercise right now, energy or escape?",
        ],
        Domain::Family => &[
            "Family threads run deep. Who in the family is on your mind most?",
            "What do you wish your family understood about you right now?",
            "How do you usually feel after time with family, drained or filled up?",
        ],
        Domain::Friends => &[
            "What does a good friend look like for you these days?",
            "Who do you feel most yourself around lately?",
            "Is there a friendship here that deserves more of your attention, or less?",
        ],
        Domain::Relationships => &[
            "How are things between you two when nobody else is watching?",
            "What do you need from this relationship that you're not saying out loud?",
            "When did you last feel really heard by them?",
        ],
        Domain::LoveRomance => &[
            "What does this feeling ask of you, patience or courage?",
            "How much of this is about them, and how much about who you are around them?",
            "What would you tell them if there were no consequences?",
        ],
        Domain::FoodEating => &[
            "How does food fit into how you've been feeling overall?",
            "What does eating well mean to you this week?",
            "Do meals feel like care or like a chore at the moment?",
        ],
        Domain::SleepRest => &[
            "How rested do you actually feel when you wake up?",
            "What tends to be running through your head when sleep won't come?",
            "What would a genuinely restful evening look like for you?",
        ],
        Domain::HealthMedical => &[
            "Health worries can take up a lot of quiet space. How is your body feeling today?",
            "What would taking care of yourself look like this week, concretely?",
            "Is the hardest part the symptoms themselves, or the uncertainty around them?",
        ],
        Domain::WorkCareer => &[
            "Work keeps surfacing here. What part of it costs you the most energy?",
            "If you could change one thing about your work situation, what would it be?",
            "Where is the line between caring about your work and carrying it home?",
        ],
        Domain::MoneyFinances => &[
            "Money stress has a way of leaking into everything. What feels most urgent?",
            "What would enough look like for you, in plain numbers or in feelings?",
            "Is this more about the bills themselves or about the security they stand for?",
        ],
        Domain::SchoolLearning => &[
            "How is the studying actually going, underneath the deadlines?",
            "What are you learning right now that genuinely interests you?",
            "Is the pressure coming from the coursework or from what it's supposed to prove?",
        ],
        Domain::SpiritualityReligion => &[
            "What does your practice give you when things get loud?",
            "Where do you feel most connected to something larger these days?",
            "Has your sense of meaning shifted lately, or held steady?",
        ],
        Domain::RecreationLeisure => &[
            "What did that time off actually restore for you?",
            "When you play, does your mind come along, or stay at work?",
            "What would you do with a free afternoon and zero obligations?",
        ],
        Domain::TravelNature => &[
            "What stayed with you most from being out there?",
            "What does getting away give you that home doesn't?",
            "If you could be anywhere right now, where would your feet take you?",
        ],
        Domain::CreativityArt => &[
            "What are you making lately, and what is it making of you?",
            "Does the creative work feel like flow right now or like friction?",
            "What would you create if nobody ever saw it?",
        ],
        Domain::CommunitySocietyPolitics => &[
            "The wider world weighs on you here. What part feels closest to home?",
            "What do you do with that concern, carry it or act on it?",
            "Where do you still find some agency in all of it?",
        ],
        Domain::TechnologyMediaInternet => &[
            "How do you feel after a long stretch of scrolling, honestly?",
            "What is the screen giving you, and what is it taking?",
            "If your phone disappeared for a day, what would you miss, and what wouldn't you?",
        ],
        Domain::SelfGrowthHabits => &[
            "What habit are you trying to build, and what keeps interrupting it?",
            "Which change you've made lately are you quietly proud of?",
            "What would the next small step look like, the one you could take tomorrow?",
        ],
    }
}

/// Reflective prompts keyed by the leading emotion when no topic stands out.
pub(crate) fn emotion_pool(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => &[
            "There's real brightness in this. What made the moment land so well?",
            "Hold onto that feeling for a second. Where do you notice it in your body?",
            "What would help this good stretch last a little longer?",
        ],
        Emotion::Sadness => &[
            "That sounds heavy to carry. What part weighs the most right now?",
            "It's okay for this to hurt. What would comfort look like today?",
            "When the sadness eases, even briefly, what tends to bring that about?",
        ],
        Emotion::Anger => &[
            "There's real heat in this. What crossed the line for you?",
            "Anger usually guards something softer. What feels threatened here?",
            "If the frustration could speak plainly, what would it demand?",
        ],
        Emotion::Fear => &[
            "That sounds genuinely unsettling. What's the worst-case story your mind is telling?",
            "When the worry spikes, what tends to set it off?",
            "What's one thing that still feels steady, even with all this uncertainty?",
        ],
        Emotion::Surprise => &[
            "That clearly caught you off guard. What surprised you most about it?",
            "Now that the shock has had a minute to settle, how does it look?",
            "Did this change what you expected going forward, or just the moment itself?",
        ],
        Emotion::Disgust => &[
            "Something about this really repelled you. What exactly turned your stomach?",
            "That reaction is telling you something. What boundary got crossed?",
            "What would distance from this look like for you?",
        ],
        Emotion::Neutral => &[
            "Even an ordinary day leaves traces. What stood out, however small?",
            "How would you describe today in one honest sentence?",
            "What's one thing from today you'd keep, and one you'd drop?",
        ],
        Emotion::Mixed => &[
            "It sounds like a few feelings are pulling in different directions. Which one is loudest?",
            "Both things can be true at once. What does each side want you to know?",
            "If you untangle it a little, what's underneath the push and pull?",
        ],
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::outcome::{ALL_DOMAINS, Emotion};

    #[test]
    fn every_domain_pool_has_multiple_distinct_entries() {
        for domain in ALL_DOMAINS {
            let pool = domain_pool(domain);
            assert!(pool.len() >= 2, "{domain:?} pool too small");
            for (i, a) in pool.iter().enumerate() {
                for b in pool.iter().skip(i + 1) {
                    assert_ne!(a, b, "{domain:?} pool repeats an entry");
                }
            }
        }
    }

    #[test]
    fn every_emotion_pool_has_multiple_distinct_entries() {
        for emotion in Emotion::all() {
            let pool = emotion_pool(emotion);
            assert!(pool.len() >= 2, "{emotion:?} pool too small");
        }
    }

    #[test]
    fn recall_carriers_all_have_a_slot() {
        for carrier in RECALL_CARRIERS {
            assert!(carrier.contains("{}"), "carrier missing slot: {carrier}");
        }
    }

    #[test]
    fn pool_entries_end_with_terminal_punctuation() {
        let mut all: Vec<&str> = GENERIC_POOL.to_vec();
        all.push(LAST_RESORT);
        for domain in ALL_DOMAINS {
            all.extend_from_slice(domain_pool(domain));
        }
        for emotion in Emotion::all() {
            all.extend_from_slice(emotion_pool(emotion));
        }
        for entry in all {
            let last = entry.chars().last().unwrap();
            assert!(
                matches!(last, '.' | '!' | '?'),
                "entry lacks terminal mark: {entry}"
            );
        }
    }
}
