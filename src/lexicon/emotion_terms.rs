//! Built-in emotion lexicon data.
//!
//! Tables are raw data only; compilation into lookup structures happens in
//! [`super::Lexicons`]. Terms are listed in their main inflections because
//! the light stemmer converges only some forms (both the term and its stem
//! are inserted at build time). Underscored entries correspond to idioms the
//! tokenizer pre-joins.

use crate::outcome::Emotion;

/// (emotion, hit weight, terms). Strong cues carry 2.0, standard cues 1.0,
/// weak or ambiguous cues 0.5. A term may appear under several emotions.
pub(super) const EMOTION_TERMS: &[(Emotion, f64, &[&str])] = &[
    (
        Emotion::Joy,
        2.0,
        &[
            "ecstatic",
            "elated",
            "overjoyed",
            "thrilled",
            "amazing",
            "wonderful",
            "fantastic",
            "blissful",
            "euphoric",
            "over_the_moon",
        ],
    ),
    (
        Emotion::Joy,
        1.0,
        &[
            "happy",
            "happiness",
            "glad",
            "joy",
            "joyful",
            "great",
            "good",
            "love",
            "loved",
            "loving",
            "excited",
            "exciting",
            "fun",
            "enjoy",
            "enjoyed",
            "enjoying",
            "smile",
            "smiled",
            "smiling",
            "laugh",
            "laughed",
            "laughing",
            "grateful",
            "gratitude",
            "thankful",
            "proud",
            "pleased",
            "delighted",
            "delightful",
            "content",
            "cheerful",
            "awesome",
            "beautiful",
            "celebrate",
            "celebrated",
            "celebration",
            "win",
            "won",
            "blessed",
            "hopeful",
            "relief",
            "relieved",
            "motivated",
            "satisfied",
            "satisfying",
            "upbeat",
            "nice",
        ],
    ),
    (
        Emotion::Sadness,
        2.0,
        &[
            "devastated",
            "heartbroken",
            "grief",
            "grieving",
            "miserable",
            "depressed",
            "depression",
            "hopeless",
            "despair",
            "crushed",
        ],
    ),
    (
        Emotion::Sadness,
        1.0,
        &[
            "sad",
            "sadness",
            "unhappy",
            "cry",
            "cried",
            "crying",
            "tears",
            "lonely",
            "loneliness",
            "alone",
            "missing",
            "missed",
            "loss",
            "lost",
            "hurt",
            "hurting",
            "gloomy",
            "upset",
            "disappointed",
            "disappointing",
            "disappointment",
            "regret",
            "regrets",
            "sorrow",
            "mourning",
            "empty",
            "drained",
            "ashamed",
            "shame",
            "embarrassed",
            "embarrassing",
            "guilty",
            "guilt",
            "bored",
            "boredom",
            "discouraged",
            "homesick",
            "terrible",
            "horrible",
            "awful",
            "let_down",
            "burned_out",
            "burnt_out",
        ],
    ),
    (Emotion::Sadness, 0.5, &["tired", "exhausted", "numb"]),
    (
        Emotion::Anger,
        2.0,
        &[
            "furious",
            "rage",
            "enraged",
            "livid",
            "seething",
            "outraged",
            "fuming",
        ],
    ),
    (
        Emotion::Anger,
        1.0,
        &[
            "angry",
            "anger",
            "mad",
            "annoyed",
            "annoying",
            "irritated",
            "irritating",
            "frustrated",
            "frustrating",
            "frustration",
            "pissed",
            "resentful",
            "resentment",
            "bitter",
            "hate",
            "hated",
            "unfair",
            "betrayed",
            "argument",
            "argued",
            "arguing",
            "fight",
            "fought",
            "fighting",
            "yelled",
            "yelling",
            "shouted",
            "shouting",
            "snapped",
            "fed_up",
            "worked_up",
        ],
    ),
    (Emotion::Anger, 0.5, &["upset", "screamed", "screaming"]),
    (
        Emotion::Fear,
        2.0,
        &[
            "terrified",
            "panic",
            "panicked",
            "panicking",
            "petrified",
            "horrified",
            "dread",
            "dreading",
        ],
    ),
    (
        Emotion::Fear,
        1.0,
        &[
            "afraid",
            "scared",
            "scary",
            "fear",
            "fearful",
            "anxious",
            "anxiety",
            "worried",
            "worry",
            "worries",
            "worrying",
            "nervous",
            "stress",
            "stressed",
            "stressful",
            "overwhelmed",
            "overwhelming",
            "tense",
            "uneasy",
            "frightened",
            "apprehensive",
            "insecure",
            "jittery",
            "panicky",
            "nightmare",
            "freaked_out",
            "freaking_out",
        ],
    ),
    (Emotion::Fear, 0.5, &["doubt", "doubts", "doubting"]),
    (
        Emotion::Surprise,
        2.0,
        &[
            "shocked",
            "shocking",
            "astonished",
            "astounded",
            "stunned",
            "speechless",
            "blown_away",
            "out_of_nowhere",
        ],
    ),
    (
        Emotion::Surprise,
        1.0,
        &[
            "surprised",
            "surprising",
            "surprise",
            "unexpected",
            "unexpectedly",
            "sudden",
            "suddenly",
            "unbelievable",
            "wow",
            "whoa",
            "startled",
        ],
    ),
    (
        Emotion::Disgust,
        2.0,
        &[
            "disgusting",
            "disgusted",
            "disgust",
            "revolting",
            "repulsive",
            "vile",
            "nauseating",
            "grossed_out",
        ],
    ),
    (
        Emotion::Disgust,
        1.0,
        &[
            "gross",
            "nasty",
            "ew",
            "eww",
            "yuck",
            "yucky",
            "sickening",
            "sickened",
            "creepy",
            "cringe",
            "cringed",
            "rotten",
            "filthy",
            "stink",
            "stinks",
            "stinky",
            "smelly",
            "repulsed",
        ],
    ),
];

/// Tokens that anchor a Neutral reading. These are counted separately and
/// only contribute once a minimum number of hits is reached.
pub(super) const NEUTRAL_ANCHORS: &[&str] = &[
    "okay",
    "ok",
    "fine",
    "alright",
    "normal",
    "usual",
    "routine",
    "regular",
    "typical",
    "ordinary",
    "average",
    "meh",
    "calm",
    "uneventful",
    "as_usual",
    "nothing_much",
    "nothing_special",
    "same_old",
];

/// Phrase patterns matched against lowercased clause text. Apostrophes are
/// still present at this stage, so contractions match via `.?`.
pub(super) const EMOTION_PHRASES: &[(&str, &[(Emotion, f64)])] = &[
    (r"\bnot\s+(?:too|so|that)\s+bad\b", &[(Emotion::Joy, 0.5)]),
    (r"\bcan.?t\s+believe\b", &[(Emotion::Surprise, 1.5)]),
    (r"\bout\s+of\s+the\s+blue\b", &[(Emotion::Surprise, 2.0)]),
    (r"\bfeel(?:ing)?\s+down\b", &[(Emotion::Sadness, 1.5)]),
    (r"\bbroke\s+down\b", &[(Emotion::Sadness, 2.0)]),
    (r"\bheart\s+(?:sank|sinks)\b", &[(Emotion::Sadness, 2.0)]),
    (r"\bmiss(?:ing)?\s+(?:him|her|them|you|my)\b", &[(Emotion::Sadness, 1.5)]),
    (r"\bworst\s+day\b", &[(Emotion::Sadness, 2.0)]),
    (r"\blost\s+it\b", &[(Emotion::Anger, 1.5)]),
    (r"\bblew\s+up\s+at\b", &[(Emotion::Anger, 2.0)]),
    (
        r"\b(?:sick|tired)\s+of\b",
        &[(Emotion::Anger, 1.5), (Emotion::Disgust, 0.5)],
    ),
    (r"\bon\s+edge\b", &[(Emotion::Fear, 1.5)]),
    (r"\bworried\s+sick\b", &[(Emotion::Fear, 2.0)]),
    (r"\bheart\s+(?:was\s+)?racing\b", &[(Emotion::Fear, 1.5)]),
    (r"\bstressed\s+out\b", &[(Emotion::Fear, 1.5)]),
    (r"\bfreak(?:ed|ing)?\s+me\s+out\b", &[(Emotion::Fear, 1.5)]),
    (r"\bmade\s+my\s+day\b", &[(Emotion::Joy, 2.0)]),
    (r"\bbest\s+day\b", &[(Emotion::Joy, 2.0)]),
    (r"\bno\s+big\s+deal\b", &[(Emotion::Neutral, 1.0)]),
];

/// Emoji mapped to a direct emotion add. Scanned over the raw text because
/// emoji never survive tokenization.
pub(super) const EMOJI_TABLE: &[(&str, Emotion)] = &[
    ("😀", Emotion::Joy),
    ("😄", Emotion::Joy),
    ("😁", Emotion::Joy),
    ("🙂", Emotion::Joy),
    ("😊", Emotion::Joy),
    ("😍", Emotion::Joy),
    ("🎉", Emotion::Joy),
    ("❤", Emotion::Joy),
    ("💕", Emotion::Joy),
    ("😢", Emotion::Sadness),
    ("😭", Emotion::Sadness),
    ("😞", Emotion::Sadness),
    ("😔", Emotion::Sadness),
    ("💔", Emotion::Sadness),
    ("😠", Emotion::Anger),
    ("😡", Emotion::Anger),
    ("🤬", Emotion::Anger),
    ("😨", Emotion::Fear),
    ("😰", Emotion::Fear),
    ("😱", Emotion::Fear),
    ("😟", Emotion::Fear),
    ("😮", Emotion::Surprise),
    ("😲", Emotion::Surprise),
    ("🤯", Emotion::Surprise),
    ("🤢", Emotion::Disgust),
    ("🤮", Emotion::Disgust),
];

/// Negators invert the sign of a nearby lexicon hit. Apostrophe-free forms
/// because the tokenizer strips apostrophes.
pub(super) const NEGATORS: &[&str] = &[
    "not", "no", "never", "cant", "cannot", "dont", "didnt", "doesnt", "isnt", "wasnt",
    "werent", "wont", "couldnt", "shouldnt", "wouldnt", "aint", "nothing", "without",
    "hardly", "barely",
];

/// Intensifiers multiply a nearby hit by the configured factor.
pub(super) const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "so",
    "extremely",
    "totally",
    "incredibly",
    "absolutely",
    "super",
    "completely",
    "utterly",
    "deeply",
];

/// Dampeners multiply a nearby hit by the configured factor.
pub(super) const DAMPENERS: &[&str] = &[
    "a_bit",
    "a_little",
    "kind_of",
    "sort_of",
    "slightly",
    "somewhat",
    "mildly",
];
