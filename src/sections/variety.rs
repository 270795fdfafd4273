//! Character variety sections - one check per character class.
//!
//! Classes are ASCII: `A-Z`, `a-z`, `0-9`, and anything else counts as special.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::types::Criterion;

fn class_section(
    password: &SecretString,
    criterion: Criterion,
    matches: fn(&char) -> bool,
) -> SectionResult {
    if password.expose_secret().chars().any(|c| matches(&c)) {
        None
    } else {
        Some(criterion.suggestion())
    }
}

/// Checks for at least one uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    class_section(password, Criterion::Upper, char::is_ascii_uppercase)
}

/// Checks for at least one lowercase letter.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    class_section(password, Criterion::Lower, char::is_ascii_lowercase)
}

/// Checks for at least one digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    class_section(password, Criterion::Digit, char::is_ascii_digit)
}

/// Checks for at least one character outside `A-Z`, `a-z` and `0-9`.
pub fn special_section(password: &SecretString) -> SectionResult {
    class_section(password, Criterion::Special, |c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_uppercase_section() {
        assert!(uppercase_section(&secret("lowercase123!")).is_some());
        assert_eq!(uppercase_section(&secret("lowerCase")), None);
    }

    #[test]
    fn test_lowercase_section() {
        let result = lowercase_section(&secret("UPPERCASE123!"));
        assert!(matches!(result, Some(reason) if reason.contains("lowercase")));
        assert_eq!(lowercase_section(&secret("UPPERcASE")), None);
    }

    #[test]
    fn test_digit_section() {
        let result = digit_section(&secret("NoNumbers!"));
        assert!(matches!(result, Some(reason) if reason.contains("digit")));
        assert_eq!(digit_section(&secret("one1")), None);
    }

    #[test]
    fn test_special_section() {
        let result = special_section(&secret("NoSpecial123"));
        assert!(matches!(result, Some(reason) if reason.contains("special")));
        assert_eq!(special_section(&secret("has space")), None);
        assert_eq!(special_section(&secret("HasAll123!@#")), None);
    }

    #[test]
    fn test_non_ascii_letters_count_as_special() {
        let pwd = secret("ÄÖÜ");
        assert!(uppercase_section(&pwd).is_some());
        assert_eq!(special_section(&pwd), None);
    }
}
