#![forbid(unsafe_code)]

//! Schemas for records only known at runtime
//!
//! A DynamicSchema is loaded from `fieldtags.toml` and validates JSON objects.
//! Each declared field is read from the object by name:
//!
//! - strings are used as is
//! - numbers and booleans use their JSON text
//! - `null` and missing keys read as the empty string
//! - arrays and objects are rejected as invalid input
//!
//! Keys the schema does not declare are ignored.

use crate::config::SchemaConfig;
use crate::engine::inspector::{FieldDescriptor, compile_field};
use crate::engine::validator::{ValidationOutcome, validate_fields};
use crate::error::{InputError, RuleError};
use crate::rules::RuleSet;
use crate::types::{FieldName, ParseMode};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A field declared in a DynamicSchema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicField {
    pub name: FieldName,
    pub rules: RuleSet,
}

/// Field table for JSON records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSchema {
    name: String,
    mode: ParseMode,
    fields: Vec<DynamicField>,
}

impl DynamicSchema {
    /// Creates an empty schema
    pub fn new(name: impl Into<String>, mode: ParseMode) -> Self {
        Self {
            name: name.into(),
            mode,
            fields: Vec::new(),
        }
    }

    /// Build a schema from a parsed `fieldtags.toml`
    ///
    /// # Errors
    ///
    /// Returns `RuleError` for invalid or duplicate field names and, in strict
    /// mode, for any rule tag that does not parse.
    pub fn from_config(config: &SchemaConfig) -> Result<Self, RuleError> {
        let mut schema = Self::new(config.schema.name.clone(), config.schema.mode);
        for field in &config.fields {
            schema.add_field(&field.name, &field.rules)?;
        }
        Ok(schema)
    }

    /// Declare the next field
    ///
    /// # Errors
    ///
    /// See [`DynamicSchema::from_config`].
    pub fn add_field(&mut self, name: &str, tag: &str) -> Result<(), RuleError> {
        let (name, rules) = compile_field(name, tag, self.mode, |candidate| {
            self.fields.iter().any(|field| &field.name == candidate)
        })?;
        self.fields.push(DynamicField { name, rules });
        Ok(())
    }

    /// Returns the record type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parse mode used for rule tags
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Returns the declared fields in order
    pub fn fields(&self) -> &[DynamicField] {
        &self.fields
    }

    /// Walk the declared fields of `record` in order
    ///
    /// The record's shape is checked up front, so the returned iterator
    /// cannot fail.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NotARecord` if `record` is not a JSON object and
    /// `InputError::NestedValue` if a declared field holds an array or object.
    pub fn inspect<'a>(
        &'a self,
        record: &'a Value,
    ) -> Result<impl Iterator<Item = FieldDescriptor<'a>>, InputError> {
        let object = record.as_object().ok_or(InputError::NotARecord {
            found: json_type_name(record),
        })?;

        for field in &self.fields {
            if let Some(Value::Array(_) | Value::Object(_)) = object.get(field.name.as_str()) {
                return Err(InputError::NestedValue {
                    field: field.name.to_string(),
                });
            }
        }

        Ok(self.fields.iter().map(move |field| FieldDescriptor {
            name: field.name.as_str(),
            value: field_text(object, field.name.as_str()),
            rules: &field.rules,
        }))
    }

    /// Validate one JSON record
    ///
    /// # Errors
    ///
    /// See [`DynamicSchema::inspect`].
    pub fn validate(&self, record: &Value) -> Result<ValidationOutcome, InputError> {
        Ok(validate_fields(self.inspect(record)?))
    }
}

/// Text of a flat field; nested values are rejected before this is called
fn field_text<'a>(object: &'a Map<String, Value>, name: &str) -> Cow<'a, str> {
    match object.get(name) {
        Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
        Some(Value::Null) | None => Cow::Borrowed(""),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
