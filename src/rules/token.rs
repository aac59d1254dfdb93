#![forbid(unsafe_code)]

//! Rule tokens and dispatch
//!
//! A rule token is one parsed instruction from a rule tag. Tokens are matched
//! against the vocabulary once, in a fixed precedence:
//!
//! 1. starts with `min=` → [`RuleToken::MinLength`]
//! 2. starts with `max=` → [`RuleToken::MaxLength`]
//! 3. equals `required` → [`RuleToken::Required`]
//! 4. equals `email` → [`RuleToken::Email`]
//!
//! Anything else is ignored in permissive mode and rejected in strict mode.

use crate::error::RuleError;
use crate::rules::builtin::{Email, MaxLength, MinLength, Required};
use crate::rules::{Checker, Violation};
use crate::types::{ParseMode, RuleKind};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use tracing::debug;

/// A single parsed rule instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleToken {
    MinLength(usize),
    MaxLength(usize),
    Required,
    Email,
}

/// Result of matching raw token text against the vocabulary
enum Matched<'a> {
    Min(&'a str),
    Max(&'a str),
    Required,
    Email,
    Unknown,
}

fn classify(token: &str) -> Matched<'_> {
    if let Some(argument) = token.strip_prefix("min=") {
        Matched::Min(argument)
    } else if let Some(argument) = token.strip_prefix("max=") {
        Matched::Max(argument)
    } else if token == "required" {
        Matched::Required
    } else if token == "email" {
        Matched::Email
    } else {
        Matched::Unknown
    }
}

impl RuleToken {
    /// Parse one token according to `mode`
    ///
    /// Returns `Ok(None)` for a token that is ignored in permissive mode.
    ///
    /// # Errors
    ///
    /// In strict mode, returns `RuleError::UnknownToken` for a token outside the
    /// vocabulary and `RuleError::InvalidArgument` for a min/max argument that is
    /// not a non-negative integer.
    pub fn parse(token: &str, mode: ParseMode) -> Result<Option<Self>, RuleError> {
        match mode {
            ParseMode::Permissive => Ok(Self::parse_permissive(token)),
            ParseMode::Strict => Self::parse_strict(token).map(Some),
        }
    }

    /// Parse one token, ignoring unknown tokens and defaulting bad arguments to 0
    pub fn parse_permissive(token: &str) -> Option<Self> {
        match classify(token) {
            Matched::Min(argument) => Some(RuleToken::MinLength(permissive_threshold(
                token, argument,
            ))),
            Matched::Max(argument) => Some(RuleToken::MaxLength(permissive_threshold(
                token, argument,
            ))),
            Matched::Required => Some(RuleToken::Required),
            Matched::Email => Some(RuleToken::Email),
            Matched::Unknown => {
                debug!(token, "ignoring unknown rule token");
                None
            }
        }
    }

    /// Parse one token, rejecting anything outside the vocabulary
    ///
    /// # Errors
    ///
    /// See [`RuleToken::parse`].
    pub fn parse_strict(token: &str) -> Result<Self, RuleError> {
        match classify(token) {
            Matched::Min(argument) => strict_threshold(token, argument).map(RuleToken::MinLength),
            Matched::Max(argument) => strict_threshold(token, argument).map(RuleToken::MaxLength),
            Matched::Required => Ok(RuleToken::Required),
            Matched::Email => Ok(RuleToken::Email),
            Matched::Unknown => Err(RuleError::UnknownToken(token.to_string())),
        }
    }

    /// Returns the kind of rule this token represents
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleToken::MinLength(_) => RuleKind::MinLength,
            RuleToken::MaxLength(_) => RuleKind::MaxLength,
            RuleToken::Required => RuleKind::Required,
            RuleToken::Email => RuleKind::Email,
        }
    }

    /// Run this token's checker against a field value
    pub fn check(&self, field: &str, value: &str) -> Result<(), Violation> {
        match *self {
            RuleToken::MinLength(n) => MinLength(n).check(field, value),
            RuleToken::MaxLength(n) => MaxLength(n).check(field, value),
            RuleToken::Required => Required.check(field, value),
            RuleToken::Email => Email.check(field, value),
        }
    }
}

impl fmt::Display for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleToken::MinLength(n) | RuleToken::MaxLength(n) => {
                write!(f, "{}={}", self.kind().keyword(), n)
            }
            RuleToken::Required | RuleToken::Email => f.write_str(self.kind().keyword()),
        }
    }
}

/// Parse a min/max argument; well-formed digits too large for `usize` saturate
fn parse_threshold(argument: &str) -> Result<usize, ParseIntError> {
    match argument.parse::<usize>() {
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        result => result,
    }
}

fn permissive_threshold(token: &str, argument: &str) -> usize {
    parse_threshold(argument).unwrap_or_else(|_| {
        debug!(token, argument, "malformed rule argument, using 0");
        0
    })
}

fn strict_threshold(token: &str, argument: &str) -> Result<usize, RuleError> {
    parse_threshold(argument).map_err(|_| RuleError::InvalidArgument {
        token: token.to_string(),
        argument: argument.to_string(),
    })
}
