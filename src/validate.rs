//! Contact Form Validation
//!
//! Pure field rules shared by the blur and submit paths. Values are
//! trimmed before length checks, matching what the backend does on its
//! side.

use std::sync::OnceLock;

use regex_lite::Regex;

/// The four contact form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name; also the key used in server field-error payloads.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
    })
}

/// Check one field against its rule. `None` means the value passes.
pub fn check(field: Field, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    match field {
        Field::Name if trimmed.chars().count() < 2 => {
            Some("Name must be at least 2 characters long")
        }
        Field::Email if trimmed.is_empty() => Some("Email is required"),
        Field::Email if !email_re().is_match(trimmed) => {
            Some("Please enter a valid email address")
        }
        Field::Subject if trimmed.chars().count() < 3 => {
            Some("Subject must be at least 3 characters long")
        }
        Field::Message if trimmed.chars().count() < 10 => {
            Some("Message must be at least 10 characters long")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_needs_two_chars_after_trim() {
        assert!(check(Field::Name, "").is_some());
        assert!(check(Field::Name, "A").is_some());
        assert!(check(Field::Name, " A ").is_some());
        assert!(check(Field::Name, "Al").is_none());
        assert!(check(Field::Name, "  Al  ").is_none());
    }

    #[test]
    fn test_empty_email_gets_required_message() {
        assert_eq!(check(Field::Email, ""), Some("Email is required"));
        assert_eq!(check(Field::Email, "   "), Some("Email is required"));
    }

    #[test]
    fn test_malformed_email_gets_format_message() {
        for bad in ["bad", "a@b", "a@b.", "@example.com", "user@.com", "user@example.c"] {
            assert_eq!(
                check(Field::Email, bad),
                Some("Please enter a valid email address"),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_valid_emails_pass() {
        for good in [
            "user@example.com",
            "user.name+tag@example.co.uk",
            "UPPER_case%ok@sub.domain.io",
        ] {
            assert!(check(Field::Email, good).is_none(), "expected {good:?} to pass");
        }
    }

    #[test]
    fn test_subject_needs_three_chars() {
        assert!(check(Field::Subject, "Hi").is_some());
        assert!(check(Field::Subject, "Hey").is_none());
    }

    #[test]
    fn test_message_needs_ten_chars() {
        assert!(check(Field::Message, "Too short").is_some());
        assert!(check(Field::Message, "Long enough now.").is_none());
    }

    #[test]
    fn test_short_name_passes_while_bad_email_fails() {
        assert!(check(Field::Name, "Al").is_none());
        assert!(check(Field::Email, "bad").is_some());
        assert!(check(Field::Subject, "Hi there").is_none());
        assert!(check(Field::Message, "A longer message body").is_none());
    }
}
