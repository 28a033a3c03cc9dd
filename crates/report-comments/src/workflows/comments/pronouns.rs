use super::domain::PronounPair;

/// Maps a free-text gender token to the pronouns used in the comment.
///
/// Unrecognized or empty input falls back to the neutral pair so a comment can always be
/// produced.
pub fn resolve_pronouns(gender: &str) -> PronounPair {
    match gender.trim().to_lowercase().as_str() {
        "male" => PronounPair::MASCULINE,
        "female" => PronounPair::FEMININE,
        _ => PronounPair::NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_tokens_case_insensitively() {
        assert_eq!(resolve_pronouns("Male"), PronounPair::MASCULINE);
        assert_eq!(resolve_pronouns("MALE"), PronounPair::MASCULINE);
        assert_eq!(resolve_pronouns("female"), PronounPair::FEMININE);
        assert_eq!(resolve_pronouns(" Female "), PronounPair::FEMININE);
    }

    #[test]
    fn unknown_tokens_fall_back_to_neutral() {
        for token in ["", "   ", "F", "non-binary", "unknown", "males"] {
            assert_eq!(resolve_pronouns(token), PronounPair::NEUTRAL, "token {token:?}");
        }
    }
}
