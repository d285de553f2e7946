//! Format rules for email and phone fields

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One `@`, non-space local and domain parts, domain contains a dot
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX pattern is invalid")
});

/// Optional leading `+`, then digits, spaces, hyphens and parentheses only
static PHONE_CHARS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[\d\s\-()]+$").expect("PHONE_CHARS_REGEX pattern is invalid")
});

/// Email address rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRule;

impl EmailRule {
    pub fn matches(&self, value: &str) -> bool {
        // regex-lite `\s` is ASCII only
        !value.chars().any(char::is_whitespace) && EMAIL_REGEX.is_match(value)
    }
}

/// Phone number rule
///
/// `min_chars` counts the characters after the optional `+`.
/// `min_digits` rejects inputs made only of separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRule {
    pub min_chars: usize,
    pub min_digits: usize,
}

impl Default for PhoneRule {
    fn default() -> Self {
        Self {
            min_chars: 10,
            min_digits: 7,
        }
    }
}

impl PhoneRule {
    pub fn matches(&self, value: &str) -> bool {
        // Any Unicode space counts as a separator
        let value: String = value
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        if !PHONE_CHARS_REGEX.is_match(&value) {
            return false;
        }
        let body = value.strip_prefix('+').unwrap_or(&value);
        let digits = body.chars().filter(char::is_ascii_digit).count();
        body.chars().count() >= self.min_chars && digits >= self.min_digits
    }
}

/// All format rules applied by the validator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub email: EmailRule,
    pub phone: PhoneRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_address() {
        assert!(EmailRule.matches("user@example.com"));
        assert!(EmailRule.matches("first.last+tag@mail.example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!EmailRule.matches("user@"));
        assert!(!EmailRule.matches("userexample.com"));
        assert!(!EmailRule.matches("user@example"));
        assert!(!EmailRule.matches("us er@example.com"));
        assert!(!EmailRule.matches("a@b@example.com"));
    }

    #[test]
    fn email_rejects_unicode_spaces() {
        assert!(!EmailRule.matches("user\u{00A0}name@example.com"));
        assert!(!EmailRule.matches("user@exa\u{2003}mple.com"));
    }

    #[test]
    fn phone_accepts_unicode_space_separators() {
        let rule = PhoneRule::default();
        assert!(rule.matches("+1\u{00A0}555\u{2003}123\u{2009}4567"));
        assert!(!rule.matches("+1\u{00A0}555\u{00A0}CALL"));
    }

    #[test]
    fn phone_accepts_formatted_number() {
        let rule = PhoneRule::default();
        assert!(rule.matches("+1 555-123-4567"));
        assert!(rule.matches("(592) 226-1234"));
        assert!(rule.matches("5922261234"));
    }

    #[test]
    fn phone_rejects_short_number() {
        assert!(!PhoneRule::default().matches("12345"));
    }

    #[test]
    fn phone_rejects_separator_only_input() {
        assert!(!PhoneRule::default().matches("----------"));
        assert!(!PhoneRule::default().matches("(((   )))--"));
    }

    #[test]
    fn phone_rejects_letters_and_inner_plus() {
        let rule = PhoneRule::default();
        assert!(!rule.matches("555-CALL-NOW"));
        assert!(!rule.matches("1+5551234567"));
    }

    #[test]
    fn phone_plus_does_not_count_towards_length() {
        let rule = PhoneRule {
            min_chars: 10,
            min_digits: 0,
        };
        assert!(!rule.matches("+123456789"));
        assert!(rule.matches("+1234567890"));
    }
}
