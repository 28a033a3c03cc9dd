//! Sentence-level text normalization shared by the renderer and the assembler.

pub(crate) fn is_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_soft_punctuation(ch: char) -> bool {
    matches!(ch, ',' | ';' | ':')
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first letter so a fragment can continue a sentence.
///
/// Acronyms ("IGCSE ...") and the pronoun "I" are left alone.
pub fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let rest = chars.as_str();
    let second = rest.chars().next();
    let is_acronym = second.is_some_and(char::is_uppercase);
    let is_pronoun_i = first == 'I' && second.map_or(true, |ch| !ch.is_alphanumeric());
    if is_acronym || is_pronoun_i {
        return text.to_string();
    }

    first.to_lowercase().chain(rest.chars()).collect()
}

pub(crate) fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

/// Trims a sentence and appends `.` unless it already ends in a terminal mark. Dangling commas,
/// semicolons and colons are dropped first. Blank input stays blank.
pub fn terminate_sentence(text: &str) -> String {
    let trimmed = text
        .trim()
        .trim_end_matches(|ch: char| ch.is_whitespace() || is_soft_punctuation(ch));
    if trimmed.is_empty() {
        return String::new();
    }

    let mut sentence = trimmed.to_string();
    if !sentence.ends_with(is_terminal) {
        sentence.push('.');
    }
    sentence
}

/// Uppercases the first letter of every sentence. A sentence starts the text or follows a
/// terminal mark plus whitespace; whitespace runs at those boundaries become a single space.
pub fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_start = true;
    let mut chars = text.trim().chars().peekable();

    while let Some(ch) = chars.next() {
        if at_start && ch.is_alphanumeric() {
            out.extend(ch.to_uppercase());
            at_start = false;
            continue;
        }

        out.push(ch);
        if is_terminal(ch) && chars.peek().is_some_and(|next| next.is_whitespace()) {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
            at_start = true;
        }
    }

    out
}

/// Collapses runs of terminal marks to their first mark (`..` → `.`, `?.` → `?`) and drops
/// spaces or soft punctuation stranded in front of a terminal mark.
pub fn collapse_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        if is_terminal(ch) {
            let kept = out
                .trim_end_matches(|prev: char| prev == ' ' || is_soft_punctuation(prev))
                .len();
            out.truncate(kept);
            if out.ends_with(is_terminal) {
                continue;
            }
        }
        out.push(ch);
    }

    out
}

/// Shortens `text` to at most `budget` characters without splitting a sentence.
///
/// Text within budget is returned unchanged. Otherwise the text is cut back to the last terminal
/// mark inside the budget window that ends a sentence (followed by whitespace or the end of the
/// text). When the window holds no such mark the text is hard-cut at a word boundary and closed
/// with a single `.`.
pub fn truncate_to_budget(text: &str, budget: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= budget {
        return text.to_string();
    }
    if budget == 0 {
        return String::new();
    }

    let boundary = (0..budget).rev().find(|&index| {
        is_terminal(chars[index]) && chars.get(index + 1).map_or(true, |next| next.is_whitespace())
    });

    if let Some(end) = boundary {
        let kept: String = chars[..=end].iter().collect();
        if kept.chars().any(char::is_alphanumeric) {
            return kept;
        }
    }

    hard_cut(&chars, budget)
}

fn hard_cut(chars: &[char], budget: usize) -> String {
    let limit = budget - 1;
    let mut cut: String = chars[..limit].iter().collect();

    let splits_word = chars.get(limit).is_some_and(|next| !next.is_whitespace());
    if splits_word {
        if let Some(space) = cut.rfind(char::is_whitespace) {
            if cut[..space].chars().any(char::is_alphanumeric) {
                cut.truncate(space);
            }
        }
    }

    let mut result = cut
        .trim_end_matches(|ch: char| {
            ch.is_whitespace() || is_soft_punctuation(ch) || is_terminal(ch)
        })
        .to_string();
    result.push('.');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_first_leaves_acronyms_and_pronoun_i() {
        assert_eq!(lowercase_first("Showed effort"), "showed effort");
        assert_eq!(lowercase_first("IGCSE practice"), "IGCSE practice");
        assert_eq!(lowercase_first("I think"), "I think");
        assert_eq!(lowercase_first("Improve accuracy"), "improve accuracy");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn terminate_sentence_appends_period_once() {
        assert_eq!(terminate_sentence("Works hard"), "Works hard.");
        assert_eq!(terminate_sentence("Works hard, "), "Works hard.");
        assert_eq!(terminate_sentence("Works hard!"), "Works hard!");
        assert_eq!(terminate_sentence("Really?"), "Really?");
        assert_eq!(terminate_sentence("   "), "");
    }

    #[test]
    fn capitalize_sentences_uppercases_each_sentence() {
        let text = "this term, Aseel worked hard.  in reading, she improved! well done? yes";
        assert_eq!(
            capitalize_sentences(text),
            "This term, Aseel worked hard. In reading, she improved! Well done? Yes"
        );
    }

    #[test]
    fn capitalize_sentences_ignores_marks_inside_words() {
        assert_eq!(
            capitalize_sentences("scored 3.5 marks e.g.in tests."),
            "Scored 3.5 marks e.g.in tests."
        );
    }

    #[test]
    fn collapse_punctuation_removes_doubled_marks() {
        assert_eq!(collapse_punctuation("Done.. Next?. Yes!."), "Done. Next? Yes!");
        assert_eq!(collapse_punctuation("Wait ... then ,."), "Wait. then.");
        assert_eq!(collapse_punctuation("Scored 3.5 today."), "Scored 3.5 today.");
    }

    #[test]
    fn truncation_keeps_text_within_budget_unchanged() {
        let text = "One sentence. Another one.";
        assert_eq!(truncate_to_budget(text, text.chars().count()), text);
        assert_eq!(truncate_to_budget(text, 500), text);
    }

    #[test]
    fn truncation_cuts_back_to_last_complete_sentence() {
        let text = "First sentence here. Second sentence is much longer than the budget.";
        assert_eq!(truncate_to_budget(text, 30), "First sentence here.");
    }

    #[test]
    fn truncation_keeps_sentence_ending_exactly_at_budget() {
        let text = "First. Second. Third sentence.";
        assert_eq!(truncate_to_budget(text, 14), "First. Second.");
    }

    #[test]
    fn truncation_ignores_marks_that_do_not_end_a_sentence() {
        let text = "Scored 3.5 on average and kept improving steadily all term long.";
        let truncated = truncate_to_budget(text, 20);
        assert_eq!(truncated, "Scored 3.5 on.");
        assert!(truncated.chars().count() <= 20);
    }

    #[test]
    fn truncation_falls_back_to_hard_cut_at_word_boundary() {
        let text = "an extremely long sentence without any terminal punctuation at all";
        let truncated = truncate_to_budget(text, 25);
        assert_eq!(truncated, "an extremely long.");
        assert!(truncated.chars().count() <= 25);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "Élève très appliquée. Ça continue encore longtemps.";
        let truncated = truncate_to_budget(text, 25);
        assert_eq!(truncated, "Élève très appliquée.");
    }
}
