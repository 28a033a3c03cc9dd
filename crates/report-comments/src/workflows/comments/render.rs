use super::domain::PronounPair;
use super::text::{capitalize_first, starts_lowercase};

/// Replaces the masculine placeholder words in `phrase` with `pronouns` in a single pass.
///
/// Placeholders are matched as whole words, case-insensitively: `he` and `him` become the subject
/// pronoun, `his` the possessive, and `himself`/`herself` the subject pronoun plus `self`. A
/// capitalized placeholder yields a capitalized replacement. Text produced by a replacement is
/// never scanned again.
pub fn substitute_pronouns(phrase: &str, pronouns: PronounPair) -> String {
    let mut out = String::with_capacity(phrase.len() + 8);
    let mut word_start: Option<usize> = None;

    for (index, ch) in phrase.char_indices() {
        if ch.is_alphanumeric() || ch == '_' {
            word_start.get_or_insert(index);
            continue;
        }
        if let Some(start) = word_start.take() {
            push_word(&mut out, &phrase[start..index], pronouns);
        }
        out.push(ch);
    }
    if let Some(start) = word_start {
        push_word(&mut out, &phrase[start..], pronouns);
    }

    out
}

fn push_word(out: &mut String, word: &str, pronouns: PronounPair) {
    let Some(replacement) = placeholder_replacement(word, pronouns) else {
        out.push_str(word);
        return;
    };

    if word.starts_with(char::is_uppercase) {
        out.push_str(&capitalize_first(&replacement));
    } else {
        out.push_str(&replacement);
    }
}

fn placeholder_replacement(word: &str, pronouns: PronounPair) -> Option<String> {
    let matches = |placeholder: &str| word.eq_ignore_ascii_case(placeholder);

    if matches("he") || matches("him") {
        Some(pronouns.subject.to_string())
    } else if matches("his") {
        Some(pronouns.possessive.to_string())
    } else if matches("himself") || matches("herself") {
        Some(format!("{}self", pronouns.subject))
    } else {
        None
    }
}

/// Turns a catalog phrase into a sentence fragment for one student.
///
/// With a `lead_in` the fragment is appended to it verbatim. Without one, a fragment that starts
/// lowercase (a bare verb phrase such as "showed real effort") is given the capitalized subject
/// pronoun. Blank phrases render as an empty string.
pub fn render_fragment(phrase: &str, pronouns: PronounPair, lead_in: Option<&str>) -> String {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return String::new();
    }

    let substituted = substitute_pronouns(phrase, pronouns);
    match lead_in {
        Some(lead_in) => format!("{lead_in}{substituted}"),
        None if starts_lowercase(&substituted) => {
            format!("{} {substituted}", capitalize_first(pronouns.subject))
        }
        None => substituted,
    }
}
