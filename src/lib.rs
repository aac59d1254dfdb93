#![forbid(unsafe_code)]

//! fieldtags: declarative field validation driven by rule tags
//!
//! Each field of a record carries a comma-separated rule tag such as
//! `"min=2,max=32"` or `"required,email"`. Validation walks the fields in
//! declaration order, applies each field's rules left to right, and reports
//! the first violation it finds.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, FieldtagsError, InputError, RuleError};

// Re-export core domain types for convenient access
pub use engine::{
    DynamicSchema, FieldDescriptor, Record, Schema, SchemaBuilder, ValidationOutcome, validate,
};
pub use rules::{RuleSet, RuleToken, Violation, tokenize};
pub use types::{FieldName, ParseMode, RuleKind};
