/// Characters other than letters and digits that survive sanitizing.
const ALLOWED_PUNCTUATION: [char; 4] = [' ', '.', '\'', '-'];

/// Strips everything but letters, digits and `" .'-"`, keeps at most `max_len` characters and
/// trims the result.
pub fn strip_unsafe(text: &str, max_len: usize) -> String {
    let kept: String = text
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ALLOWED_PUNCTUATION.contains(ch))
        .take(max_len)
        .collect();
    kept.trim().to_string()
}

/// Cleans a free-text value such as a student name: [`strip_unsafe`], then title case (each run
/// of letters starts uppercase and continues lowercase).
pub fn sanitize_text(text: &str, max_len: usize) -> String {
    let stripped = strip_unsafe(text, max_len);
    let mut titled = String::with_capacity(stripped.len());
    let mut in_word = false;

    for ch in stripped.chars() {
        if ch.is_alphabetic() {
            if in_word {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(ch);
            in_word = false;
        }
    }

    titled
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("student name must contain letters or digits")]
pub struct InvalidName;

/// [`sanitize_text`] for a student name, rejecting names left without a letter or digit.
pub fn student_name(text: &str, max_len: usize) -> Result<String, InvalidName> {
    let name = sanitize_text(text, max_len);
    if name.chars().any(char::is_alphanumeric) {
        Ok(name)
    } else {
        Err(InvalidName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_markup_and_control_characters() {
        assert_eq!(sanitize_text("<b>aseel</b>", 100), "Baseelb");
        assert_eq!(sanitize_text("Robert'); DROP TABLE--", 100), "Robert' Drop Table--");
        assert_eq!(sanitize_text("line\nbreak\t", 100), "Linebreak");
    }

    #[test]
    fn title_cases_each_word() {
        assert_eq!(sanitize_text("mary-jane o'brien", 100), "Mary-Jane O'Brien");
        assert_eq!(sanitize_text("  ALEX  ", 100), "Alex");
        assert_eq!(sanitize_text("élodie", 100), "Élodie");
    }

    #[test]
    fn truncates_before_trimming() {
        assert_eq!(sanitize_text("Ann Marie", 4), "Ann");
        assert_eq!(strip_unsafe("   padded", 5), "pa");
        assert_eq!(sanitize_text("", 10), "");
    }

    #[test]
    fn strip_unsafe_keeps_case() {
        assert_eq!(strip_unsafe("Led the IGCSE club!", 100), "Led the IGCSE club");
    }

    #[test]
    fn student_names_need_a_letter_or_digit() {
        assert_eq!(student_name("  aseel ", 100), Ok("Aseel".to_string()));
        assert_eq!(student_name("<>", 100), Err(InvalidName));
        assert_eq!(student_name(" .- ", 100), Err(InvalidName));
    }
}
