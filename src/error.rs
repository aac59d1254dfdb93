//! Error types for fieldtags
//!
//! This module defines the error types used throughout fieldtags, following
//! a hierarchical structure with specific error variants for different
//! error categories. Rule violations are not errors in this sense; they are
//! reported through [`crate::engine::ValidationOutcome`].

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid TOML syntax or shape
    #[error("Failed to parse schema file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Schema file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema parsed but is not usable
    #[error("Invalid schema: {0}")]
    Validation(String),
}

/// Rule-tag parsing errors
///
/// Only raised in strict mode, or when registering a field with an
/// invalid name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Token matches no known rule
    #[error("Unknown rule token '{0}'")]
    UnknownToken(String),

    /// Numeric argument of a min/max token is not a non-negative integer
    #[error("Invalid argument '{argument}' in rule token '{token}'")]
    InvalidArgument { token: String, argument: String },

    /// Field name is empty or contains invalid characters
    #[error("Invalid field name: '{0}'")]
    InvalidFieldName(String),

    /// Field declared twice in the same schema
    #[error("Duplicate field '{0}'")]
    DuplicateField(String),
}

/// The input handed to the validator is not a flat record
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Value is not a structured record
    #[error("Expected a record (JSON object), found {found}")]
    NotARecord { found: &'static str },

    /// Field holds a nested structure
    #[error("Field '{field}' holds a nested value; only flat records are supported")]
    NestedValue { field: String },

    /// A record line could not be decoded
    #[error("Invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record line is not valid UTF-8
    #[error("Invalid UTF-8 on line {line}: {source}")]
    Encoding {
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Top-level error type for fieldtags
#[derive(Debug, thiserror::Error)]
pub enum FieldtagsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
