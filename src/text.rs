//! Sentence segmentation, tokenization, and light stemming.
//!
//! All classifiers share this layer so a lexicon entry means the same thing
//! everywhere. Tokenization lowercases, strips apostrophes ("can't" becomes
//! "cant"), and pre-joins a fixed set of multi-word idioms with underscores
//! so they hit the lexicons as single entries.

/// Multi-word idioms joined into single tokens, longest first per position.
///
/// Inflected forms are listed explicitly; the joined token still passes
/// through [`light_stem`] at lookup time, so "credit_cards" resolves to
/// "credit_card".
const IDIOMS: &[&[&str]] = &[
    &["out", "of", "nowhere"],
    &["over", "the", "moon"],
    &["nothing", "special"],
    &["nothing", "much"],
    &["as", "usual"],
    &["same", "old"],
    &["a", "bit"],
    &["a", "little"],
    &["kind", "of"],
    &["sort", "of"],
    &["credit", "card"],
    &["credit", "cards"],
    &["social", "media"],
    &["screen", "time"],
    &["video", "game"],
    &["video", "games"],
    &["best", "friend"],
    &["best", "friends"],
    &["hang", "out"],
    &["hanging", "out"],
    &["hung", "out"],
    &["road", "trip"],
    &["mental", "health"],
    &["self", "care"],
    &["side", "hustle"],
    &["real", "estate"],
    &["laid", "off"],
    &["break", "up"],
    &["broke", "up"],
    &["fed", "up"],
    &["burned", "out"],
    &["burnt", "out"],
    &["let", "down"],
    &["freaked", "out"],
    &["freaking", "out"],
    &["grossed", "out"],
    &["blown", "away"],
    &["worked", "up"],
];

/// Words the stemmer must leave alone because stripping would produce a
/// different real word ("made" is not "mad", "meeting" is not "meet").
const STEM_EXCEPTIONS: &[&str] = &[
    "made", "this", "movies", "bodies", "meeting", "evening", "training",
];

/// Split text into sentences on `.`, `!`, `?`, and newline, trimming each
/// fragment and dropping empties. Order is preserved.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lowercase word tokens, apostrophes stripped, idioms pre-joined.
///
/// Empty input yields an empty list.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c == '\u{2019}' || c == '\u{2018}' { '\'' } else { c })
        .filter(|c| *c != '\'')
        .collect();
    let raw: Vec<&str> = normalized
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .collect();
    join_idioms(&raw)
}

fn join_idioms(tokens: &[&str]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let mut joined = None;
        for idiom in IDIOMS {
            if tokens.len() - i >= idiom.len() && tokens[i..i + idiom.len()] == **idiom {
                joined = Some(idiom.join("_"));
                i += idiom.len();
                break;
            }
        }
        match joined {
            Some(token) => out.push(token),
            None => {
                out.push(tokens[i].to_owned());
                i += 1;
            }
        }
    }
    out
}

/// Strip one trailing `ing`/`ies`/`ed`/`ly`/`s` suffix when the remaining
/// stem keeps at least 3 characters.
///
/// Lexicons insert both raw terms and their stems, so tokens and entries
/// meet as long as both sides use this function. A lone trailing `s` is
/// never stripped after a double `s` ("stress" stays "stress").
#[must_use]
pub fn light_stem(word: &str) -> &str {
    if STEM_EXCEPTIONS.contains(&word) {
        return word;
    }
    for suffix in ["ing", "ies", "ed", "ly"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 3 {
                return stem;
            }
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if stem.len() >= 3 && !stem.ends_with('s') {
            return stem;
        }
    }
    word
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn sentences_split_on_hard_boundaries() {
        let got = split_sentences("Rough day. Meeting ran long!\nStill tired?");
        assert_eq!(got, vec!["Rough day", "Meeting ran long", "Still tired"]);
    }

    #[test]
    fn sentences_drop_empty_fragments() {
        assert!(split_sentences("...\n\n").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Big Day Today"), vec!["big", "day", "today"]);
    }

    #[test]
    fn tokenize_strips_apostrophes() {
        assert_eq!(tokenize("I can't sleep"), vec!["i", "cant", "sleep"]);
        // Curly apostrophes normalize the same way.
        assert_eq!(tokenize("don\u{2019}t"), vec!["dont"]);
    }

    #[test]
    fn tokenize_joins_idioms() {
        assert_eq!(
            tokenize("it came out of nowhere"),
            vec!["it", "came", "out_of_nowhere"]
        );
        assert_eq!(
            tokenize("paid with my credit card"),
            vec!["paid", "with", "my", "credit_card"]
        );
    }

    #[test]
    fn idiom_join_requires_exact_token_run() {
        // "out of" without "nowhere" stays separate tokens.
        assert_eq!(tokenize("out of time"), vec!["out", "of", "time"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  !! ").is_empty());
    }

    #[test]
    fn stem_strips_common_suffixes() {
        assert_eq!(light_stem("walking"), "walk");
        assert_eq!(light_stem("stressed"), "stress");
        assert_eq!(light_stem("sadly"), "sad");
        assert_eq!(light_stem("worries"), "worr");
        assert_eq!(light_stem("runs"), "run");
    }

    #[test]
    fn stem_keeps_short_stems_intact() {
        assert_eq!(light_stem("was"), "was");
        assert_eq!(light_stem("doing"), "doing");
        assert_eq!(light_stem("bed"), "bed");
    }

    #[test]
    fn stem_respects_exception_list() {
        assert_eq!(light_stem("made"), "made");
        assert_eq!(light_stem("this"), "this");
        assert_eq!(light_stem("meeting"), "meeting");
        assert_eq!(light_stem("evening"), "evening");
    }

    #[test]
    fn stem_never_breaks_double_s() {
        assert_eq!(light_stem("stress"), "stress");
        assert_eq!(light_stem("mess"), "mess");
    }

    #[test]
    fn stem_strips_only_one_suffix() {
        // "walkings" loses only the trailing s, not both suffixes.
        assert_eq!(light_stem("walkings"), "walking");
    }
}
