#![forbid(unsafe_code)]

//! First-failure-wins validation
//!
//! Fields are scanned in declaration order and each field's tokens left to
//! right. The scan stops at the first failing checker; no further fields or
//! rules are evaluated.

use crate::engine::inspector::{FieldDescriptor, Record};
use crate::rules::Violation;
use serde::Serialize;
use tracing::{debug, trace};

/// Result of validating one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationOutcome {
    /// Every rule on every field passed
    Valid,
    /// The first rule that failed
    Invalid(Violation),
}

impl ValidationOutcome {
    /// Returns true if the record passed
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Returns the violation, if any
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(violation) => Some(violation),
        }
    }

    /// Returns the violation message, if any
    pub fn message(&self) -> Option<&str> {
        self.violation().map(|violation| violation.message.as_str())
    }

    /// Convert into a `Result` for use with `?`
    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(violation) => Err(violation),
        }
    }
}

impl From<Result<(), Violation>> for ValidationOutcome {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Valid,
            Err(violation) => ValidationOutcome::Invalid(violation),
        }
    }
}

/// Validate a typed record against its registered schema
pub fn validate<R: Record>(record: &R) -> ValidationOutcome {
    R::schema().validate(record)
}

/// Validate a sequence of field descriptors, stopping at the first failure
pub fn validate_fields<'a, I>(fields: I) -> ValidationOutcome
where
    I: IntoIterator<Item = FieldDescriptor<'a>>,
{
    for field in fields {
        if field.rules.is_empty() {
            trace!(field = field.name, "no rules, skipping");
            continue;
        }

        debug!(field = field.name, tag = field.rule_tag(), "validating field");

        if let Err(violation) = field.rules.check(field.name, &field.value) {
            debug!(
                field = field.name,
                rule = %violation.kind,
                "validation failed"
            );
            return ValidationOutcome::Invalid(violation);
        }
    }

    ValidationOutcome::Valid
}
