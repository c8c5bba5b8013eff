//! Capture normalization and template assembly.
//!
//! Rule templates may contain the placeholder `$1`, filled with text captured
//! from the user's own sentence. Raw captures are messy: they arrive with
//! stray punctuation, first-person pronouns, and unbounded length. The helpers
//! here clean a capture, rewrite it into second person, stitch it into the
//! template with sensible joining, and tidy the final punctuation so the
//! emitted response always reads as one well-formed sentence.

use std::sync::OnceLock;

use regex::Regex;

/// Longest capture kept, in characters. Longer text is cut at a word boundary.
const MAX_CAPTURE_CHARS: usize = 60;

/// Words that let a capture continue a sentence without an appositive comma.
const CONNECTIVES: &[&str] = &[
    "that", "because", "when", "while", "how", "why", "where", "if", "since", "after", "before",
    "until", "whether", "what", "who", "about", "like", "being", "to", "and", "but", "or",
];

/// First-person to second-person rewrites, applied in order. Compound forms
/// come first so the bare "i" rule cannot clobber them.
const PERSON_SUBS: &[(&str, &str)] = &[
    (r"\bi\s+was\b", "you were"),
    (r"\bi\s+am\b", "you are"),
    (r"\bi['’]?m\b", "you're"),
    (r"\bi['’]ve\b", "you've"),
    (r"\bi['’]d\b", "you'd"),
    (r"\bi['’]ll\b", "you'll"),
    (r"\bmyself\b", "yourself"),
    (r"\bmy\b", "your"),
    (r"\bmine\b", "yours"),
    (r"\bme\b", "you"),
    (r"\bi\b", "you"),
];

fn person_subs() -> &'static Vec<(Regex, &'static str)> {
    static SUBS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    SUBS.get_or_init(|| {
        PERSON_SUBS
            .iter()
            .map(|(pattern, replacement)| {
                let full = format!("(?i){pattern}");
                #[allow(clippy::expect_used)]
                let regex = Regex::new(&full).expect("person substitution pattern must compile");
                (regex, *replacement)
            })
            .collect()
    })
}

fn echo_swap() -> &'static Regex {
    static ECHO: OnceLock<Regex> = OnceLock::new();
    ECHO.get_or_init(|| {
        #[allow(clippy::expect_used)]
        Regex::new(r"(?i)\byour ([a-z][a-z'’ ]{0,30}?) and you\b")
            .expect("echo swap pattern must compile")
    })
}

/// Normalize a raw regex capture into usable echo text.
///
/// Trims whitespace and surrounding punctuation, cuts overlong captures back
/// to a word boundary, and rejects anything shorter than `min_chars`
/// characters. Returns `None` when nothing usable remains.
pub(crate) fn usable_capture(raw: &str, min_chars: usize) -> Option<String> {
    let trimmed = raw
        .trim()
        .trim_matches(|c: char| c.is_ascii_punctuation() || c == '“' || c == '”' || c == '’');
    let mut capture = trimmed.to_string();
    if capture.chars().count() > MAX_CAPTURE_CHARS {
        let cut: String = capture.chars().take(MAX_CAPTURE_CHARS).collect();
        capture = match cut.rfind(' ') {
            Some(space) => cut[..space].to_string(),
            None => cut,
        };
        capture = capture
            .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
            .to_string();
    }
    if capture.chars().count() < min_chars {
        return None;
    }
    Some(capture)
}

/// Rewrite a first-person snippet into second person.
///
/// Substitutions run in a fixed order with compound forms first, so
/// "I was" becomes "you were" before the bare "I" rule can touch it.
pub(crate) fn to_second_person(text: &str) -> String {
    let mut out = text.to_string();
    for (regex, replacement) in person_subs() {
        out = regex.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Fill the `$1` placeholder in `template` with `capture`.
///
/// When the placeholder directly follows a word, the junction is decided by
/// the capture's first word: a connective reads on with a plain space
/// ("You mentioned" + "that it hurt" joins as "mentioned that"), anything else
/// is attached as an appositive with ", ". A template written with an explicit
/// space before the placeholder always joins plainly.
pub(crate) fn substitute(template: &str, capture: &str) -> String {
    let Some(position) = template.find("$1") else {
        return template.to_string();
    };
    let before = &template[..position];
    let after = &template[position + 2..];
    let joiner = if before.ends_with(|c: char| c.is_alphanumeric()) {
        let first_word = capture.split_whitespace().next().unwrap_or("");
        if CONNECTIVES.contains(&first_word) {
            " "
        } else {
            ", "
        }
    } else {
        ""
    };
    format!("{before}{joiner}{capture}{after}")
}

/// Reorder "your X and you" into "you and your X".
///
/// Person conversion of echoes like "my boss and me" yields the stilted
/// "your boss and you"; this puts the listener first.
pub(crate) fn sanitize_echo(text: &str) -> String {
    echo_swap().replace_all(text, "you and your $1").into_owned()
}

/// Final punctuation cleanup for an assembled response.
///
/// Collapses whitespace and repeated punctuation, strips space before
/// punctuation, capitalizes the first letter, and guarantees exactly one
/// terminal mark.
pub(crate) fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    let mut last_space = false;
    let mut last_punct: Option<char> = None;
    for c in text.split_whitespace().collect::<Vec<_>>().join(" ").chars() {
        if matches!(c, '.' | '!' | '?' | ',' | ';' | ':') {
            if last_punct.is_some() {
                continue;
            }
            if last_space {
                out.pop();
            }
            out.push(c);
            last_punct = Some(c);
            last_space = false;
        } else {
            out.push(c);
            last_punct = None;
            last_space = c == ' ';
        }
    }
    let mut out = out.trim().to_string();
    while out.ends_with([',', ';', ':']) {
        out.pop();
    }
    if !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(chars.as_str());
            capitalized
        }
        _ => out,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn capture_trims_and_rejects_short_text() {
        assert_eq!(usable_capture("  the deadline. ", 3).unwrap(), "the deadline");
        assert!(usable_capture(" it ", 3).is_none());
        assert!(usable_capture("   ", 3).is_none());
    }

    #[test]
    fn overlong_capture_snaps_to_a_word_boundary() {
        let raw = "a very long capture that keeps going well past the limit we allow for echoes";
        let capture = usable_capture(raw, 3).unwrap();
        assert!(capture.chars().count() <= 60);
        assert!(!capture.ends_with(' '));
        assert!(raw.starts_with(&capture));
    }

    #[test]
    fn person_conversion_handles_compound_forms_first() {
        assert_eq!(to_second_person("i was sure i'm losing my grip"), "you were sure you're losing your grip");
        assert_eq!(to_second_person("my boss ignored me and i cried"), "your boss ignored you and you cried");
    }

    #[test]
    fn connective_capture_joins_with_plain_space() {
        let out = substitute("You mentioned$1.", "that nothing helped");
        assert_eq!(out, "You mentioned that nothing helped.");
    }

    #[test]
    fn plain_capture_joins_as_appositive() {
        let out = substitute("You mentioned$1.", "the deadline");
        assert_eq!(out, "You mentioned, the deadline.");
    }

    #[test]
    fn explicit_space_before_placeholder_stays_plain() {
        let out = substitute("Tell me more about $1.", "the deadline");
        assert_eq!(out, "Tell me more about the deadline.");
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(substitute("How did that feel?", "anything"), "How did that feel?");
    }

    #[test]
    fn echo_swap_puts_listener_first() {
        let out = sanitize_echo("It sounds like your mom and you argued again.");
        assert_eq!(out, "It sounds like you and your mom argued again.");
    }

    #[test]
    fn tidy_collapses_punctuation_and_spacing() {
        assert_eq!(tidy("that hurt !!"), "That hurt!");
        assert_eq!(tidy("really ?."), "Really?");
        assert_eq!(tidy("so  much   space"), "So much space.");
    }

    #[test]
    fn tidy_strips_trailing_commas_before_terminal_mark() {
        assert_eq!(tidy("it lingers,"), "It lingers.");
    }

    #[test]
    fn substitution_round_trip_leaves_no_placeholder() {
        let capture = usable_capture("my own pace,", 3).unwrap();
        let converted = to_second_person(&capture);
        let out = tidy(&sanitize_echo(&substitute("Maybe it helps to move at $1.", &converted)));
        assert!(!out.contains("$1"));
        assert_eq!(out, "Maybe it helps to move at your own pace.");
        let terminal = out.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();
        assert_eq!(terminal, 1);
    }
}
