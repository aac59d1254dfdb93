#![forbid(unsafe_code)]

//! Core Checker trait and the Violation it reports

use crate::types::RuleKind;
use serde::Serialize;

/// A single rule violation detected by a checker
///
/// Carries everything needed to report the failure: the offending field,
/// the kind of rule that failed, and a message suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct Violation {
    /// Name of the field that failed
    pub field: String,

    /// Kind of rule that failed
    pub kind: RuleKind,

    /// Human-readable message describing the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation
    pub fn new(field: impl Into<String>, kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Trait that all checkers implement
///
/// A checker is a pure predicate over a field's text value plus the message
/// formatter used when the predicate fails. The field name is used only to
/// build the message. The trait is `Send + Sync` so compiled schemas can be
/// shared across threads.
pub trait Checker: Send + Sync {
    /// Returns the kind of rule this checker implements
    fn kind(&self) -> RuleKind;

    /// Checks `value`, returning a violation for `field` if it fails
    fn check(&self, field: &str, value: &str) -> Result<(), Violation>;
}
