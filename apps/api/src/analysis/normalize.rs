//! Job-description normalization: a strict ASCII filter.

/// Returns a copy of `text` containing only ASCII letters, ASCII digits, and
/// whitespace. Everything else is deleted outright — no substitution
/// character, no inserted separator. Order and repetition of retained
/// characters are preserved, so the function is a strict filter and
/// idempotent.
///
/// Deliberate consequence: terms joined by punctuation run together
/// ("Node.js" becomes "Nodejs", "C++" becomes "C"). Downstream analysis sees
/// exactly this filtered text, so the behavior must not be "fixed" here.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_deleted_without_inserted_spaces() {
        assert_eq!(normalize("C++ & Node.js!"), "C Nodejs");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_no_qualifying_characters() {
        assert_eq!(normalize("!@#$%^&*()"), "");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(
            normalize("Senior Rust Engineer with 5 years"),
            "Senior Rust Engineer with 5 years"
        );
    }

    #[test]
    fn test_whitespace_preserved_verbatim() {
        assert_eq!(normalize("a\tb\nc  d"), "a\tb\nc  d");
    }

    #[test]
    fn test_non_ascii_letters_deleted() {
        assert_eq!(normalize("café naïve 日本語"), "caf nave ");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["C++ & Node.js!", "", "  mixed: 10% (net) ", "日本語\nplain"];
        for s in inputs {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_output_is_ordered_subsequence_of_input() {
        let input = "Rust (systems) — 5+ yrs, Kubernetes/Docker";
        let output = normalize(input);
        let mut rest = input.chars();
        for c in output.chars() {
            assert!(
                rest.any(|i| i == c),
                "output char {c:?} out of order or missing"
            );
            assert!(c.is_ascii_alphanumeric() || c.is_whitespace());
        }
    }
}
