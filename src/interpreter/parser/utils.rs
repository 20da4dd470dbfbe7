/// Returns `true` if `text` is a valid variable name: one or more ASCII
/// letters, digits or underscores.
#[must_use]
pub fn is_variable_name(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns `true` if `text` is a number literal in integer or floating-point
/// form.
///
/// The literal must start with a digit, a sign or a dot and denote a finite
/// value, so words such as `nan` or `inf` remain variable names.
#[must_use]
pub fn is_number(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
    && text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Returns `true` if `text` is made only of operator characters.
///
/// Such a lexeme that the lexer did not recognise as an operator is a
/// misspelt one, e.g. `=` or `<>`.
#[must_use]
pub fn is_operator_like(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| matches!(c, '&' | '|' | '=' | '!' | '<' | '>'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_names() {
        assert!(is_variable_name("user_id2"));
        assert!(is_variable_name("NIL"));
        assert!(!is_variable_name(""));
        assert!(!is_variable_name("a.count"));
        assert!(!is_variable_name("é"));
    }

    #[test]
    fn numbers() {
        for text in ["0", "42", "-3", "+7", "1.5", ".5", "2e10"] {
            assert!(is_number(text), "{text}");
        }
        for text in ["nan", "inf", "-inf", "1e999", "1_000", "", "'1'"] {
            assert!(!is_number(text), "{text}");
        }
    }

    #[test]
    fn operator_like() {
        assert!(is_operator_like("="));
        assert!(is_operator_like("=>"));
        assert!(!is_operator_like("!a"));
        assert!(!is_operator_like(""));
    }
}
