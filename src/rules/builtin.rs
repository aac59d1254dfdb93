#![forbid(unsafe_code)]

//! Built-in checkers
//!
//! The four rule kinds understood by the rule-tag language. Lengths are
//! byte lengths of the UTF-8 value.

use crate::rules::{Checker, Violation};
use crate::types::RuleKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lowercase-only email pattern; uppercase addresses are rejected.
const EMAIL_PATTERN: &str = r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Fails when the value is shorter than the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLength(pub usize);

impl Checker for MinLength {
    fn kind(&self) -> RuleKind {
        RuleKind::MinLength
    }

    fn check(&self, field: &str, value: &str) -> Result<(), Violation> {
        if value.len() < self.0 {
            Err(Violation::new(
                field,
                self.kind(),
                format!("{} must be at least {} characters long", field, self.0),
            ))
        } else {
            Ok(())
        }
    }
}

/// Fails when the value is longer than the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLength(pub usize);

impl Checker for MaxLength {
    fn kind(&self) -> RuleKind {
        RuleKind::MaxLength
    }

    fn check(&self, field: &str, value: &str) -> Result<(), Violation> {
        if value.len() > self.0 {
            Err(Violation::new(
                field,
                self.kind(),
                format!("{} must be at most {} characters long", field, self.0),
            ))
        } else {
            Ok(())
        }
    }
}

/// Fails when the value is empty
///
/// Whitespace is not trimmed: `"   "` counts as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required;

impl Checker for Required {
    fn kind(&self) -> RuleKind {
        RuleKind::Required
    }

    fn check(&self, field: &str, value: &str) -> Result<(), Violation> {
        if value.is_empty() {
            Err(Violation::new(
                field,
                self.kind(),
                format!("{} is required", field),
            ))
        } else {
            Ok(())
        }
    }
}

/// Fails when the value is not a lowercase email address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Email;

impl Checker for Email {
    fn kind(&self) -> RuleKind {
        RuleKind::Email
    }

    fn check(&self, field: &str, value: &str) -> Result<(), Violation> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(Violation::new(
                field,
                self.kind(),
                format!("{} must be a valid email address", field),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        assert!(MinLength(2).check("Name", "Al").is_ok());
        assert!(MinLength(2).check("Name", "Alice").is_ok());

        let err = MinLength(2).check("Name", "A").unwrap_err();
        assert_eq!(err.kind, RuleKind::MinLength);
        assert_eq!(err.message, "Name must be at least 2 characters long");
    }

    #[test]
    fn test_min_length_zero_always_passes() {
        assert!(MinLength(0).check("Name", "").is_ok());
    }

    #[test]
    fn test_max_length() {
        assert!(MaxLength(3).check("Code", "abc").is_ok());
        assert!(MaxLength(3).check("Code", "").is_ok());

        let err = MaxLength(3).check("Code", "abcd").unwrap_err();
        assert_eq!(err.kind, RuleKind::MaxLength);
        assert_eq!(err.message, "Code must be at most 3 characters long");
    }

    #[test]
    fn test_max_length_zero_rejects_non_empty() {
        assert!(MaxLength(0).check("Code", "").is_ok());
        assert!(MaxLength(0).check("Code", "x").is_err());
    }

    #[test]
    fn test_length_counts_bytes() {
        // "é" is two bytes in UTF-8
        assert!(MinLength(2).check("Name", "é").is_ok());
        assert!(MaxLength(1).check("Name", "é").is_err());
    }

    #[test]
    fn test_required() {
        assert!(Required.check("Email", "x").is_ok());
        assert!(Required.check("Email", "   ").is_ok());

        let err = Required.check("Email", "").unwrap_err();
        assert_eq!(err.kind, RuleKind::Required);
        assert!(err.message.ends_with("is required"));
        assert_eq!(err.message, "Email is required");
    }

    #[test]
    fn test_email_accepts_lowercase_addresses() {
        assert!(Email.check("Email", "alice@example.com").is_ok());
        assert!(Email.check("Email", "first.last+tag@sub.example.org").is_ok());
        assert!(Email.check("Email", "a_b%c-d@host-1.info").is_ok());
    }

    #[test]
    fn test_email_rejections() {
        for value in [
            "aliceexample.com",
            "ALICE@EXAMPLE.COM",
            "Alice@example.com",
            "a@b.c",
            "a@b.abcde",
            "@example.com",
            "alice@.com",
            "alice@example",
            "",
            " alice@example.com",
        ] {
            let err = Email.check("Email", value).unwrap_err();
            assert_eq!(err.message, "Email must be a valid email address", "{value}");
        }
    }

    #[test]
    fn test_email_tld_bounds() {
        assert!(Email.check("Email", "a@b.co").is_ok());
        assert!(Email.check("Email", "a@b.info").is_ok());
    }
}
