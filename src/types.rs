#![forbid(unsafe_code)]

//! Core domain types for fieldtags
//!
//! This module defines the fundamental types shared by the rule parser,
//! the validation engine and the configuration layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a rule, independent of its argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    MinLength,
    MaxLength,
    Required,
    Email,
}

impl RuleKind {
    /// Returns the keyword used for this rule in a rule tag
    pub fn keyword(&self) -> &'static str {
        match self {
            RuleKind::MinLength => "min",
            RuleKind::MaxLength => "max",
            RuleKind::Required => "required",
            RuleKind::Email => "email",
        }
    }

    /// Returns the snake_case name used in machine-readable output
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::MinLength => "min_length",
            RuleKind::MaxLength => "max_length",
            RuleKind::Required => "required",
            RuleKind::Email => "email",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How rule tags are parsed
///
/// `Permissive` ignores unknown tokens and treats malformed numeric arguments
/// as 0. `Strict` rejects both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    #[default]
    Permissive,
    Strict,
}

/// A validated field name
///
/// Field names must be non-empty and contain only alphanumeric characters,
/// hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    /// Creates a new FieldName, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(FieldName(name))
    }

    /// Returns the field name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FieldName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FieldName::new(value.clone()).ok_or_else(|| format!("Invalid field name: '{}'", value))
    }
}

impl From<FieldName> for String {
    fn from(name: FieldName) -> Self {
        name.0
    }
}
