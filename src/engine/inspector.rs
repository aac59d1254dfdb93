#![forbid(unsafe_code)]

//! Field inspection for typed records
//!
//! Instead of discovering fields at runtime, a record type registers an
//! explicit [`Schema`]: for each field, in declaration order, its name, its
//! rule tag, and an accessor returning the field's text. Tags are parsed once
//! when the schema is built.

use crate::engine::validator::{ValidationOutcome, validate_fields};
use crate::error::RuleError;
use crate::rules::RuleSet;
use crate::types::{FieldName, ParseMode};
use std::borrow::Cow;

/// Ephemeral view of one field during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    /// Declared field name
    pub name: &'a str,

    /// Field value as text
    pub value: Cow<'a, str>,

    /// Parsed rule tag for this field
    pub rules: &'a RuleSet,
}

impl FieldDescriptor<'_> {
    /// Returns the raw rule tag, empty when none was declared
    pub fn rule_tag(&self) -> &str {
        self.rules.tag()
    }
}

/// Reads a field's text out of a record
pub type Accessor<R> = fn(&R) -> &str;

/// A record type with a registered schema
///
/// Implementors usually keep the schema in a `once_cell::sync::Lazy` static.
///
/// ```
/// use fieldtags::{Record, Schema, ValidationOutcome, validate};
/// use once_cell::sync::Lazy;
///
/// struct Signup {
///     handle: String,
/// }
///
/// static SIGNUP_SCHEMA: Lazy<Schema<Signup>> = Lazy::new(|| {
///     Schema::builder()
///         .field("handle", "required,max=15", |s: &Signup| s.handle.as_str())
///         .build()
///         .expect("signup schema is valid")
/// });
///
/// impl Record for Signup {
///     fn schema() -> &'static Schema<Self> {
///         &SIGNUP_SCHEMA
///     }
/// }
///
/// let outcome = validate(&Signup { handle: String::new() });
/// assert_eq!(outcome.message(), Some("handle is required"));
/// ```
pub trait Record: Sized + 'static {
    /// Returns the schema describing this record's fields
    fn schema() -> &'static Schema<Self>;
}

/// One compiled field of a schema
struct FieldSpec<R> {
    name: FieldName,
    rules: RuleSet,
    accessor: Accessor<R>,
}

/// Compiled field table for records of type `R`
pub struct Schema<R> {
    fields: Vec<FieldSpec<R>>,
}

impl<R> Schema<R> {
    /// Start building a schema
    pub fn builder() -> SchemaBuilder<R> {
        SchemaBuilder::new()
    }

    /// Walk the fields of `record` in declaration order
    pub fn inspect<'a>(&'a self, record: &'a R) -> impl Iterator<Item = FieldDescriptor<'a>> {
        self.fields.iter().map(move |spec| FieldDescriptor {
            name: spec.name.as_str(),
            value: Cow::Borrowed((spec.accessor)(record)),
            rules: &spec.rules,
        })
    }

    /// Validate `record`, reporting the first violated rule
    pub fn validate(&self, record: &R) -> ValidationOutcome {
        validate_fields(self.inspect(record))
    }

    /// Returns the declared field names in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|spec| spec.name.as_str())
    }

    /// Returns the parsed rules for a field
    pub fn rules_for(&self, name: &str) -> Option<&RuleSet> {
        self.fields
            .iter()
            .find(|spec| spec.name.as_str() == name)
            .map(|spec| &spec.rules)
    }

    /// Returns the number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<R> std::fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.fields
                    .iter()
                    .map(|spec| (spec.name.as_str(), spec.rules.tag())),
            )
            .finish()
    }
}

/// Builder for [`Schema`]
///
/// Fields are registered in declaration order; tags are parsed in
/// [`SchemaBuilder::build`].
pub struct SchemaBuilder<R> {
    mode: ParseMode,
    fields: Vec<(String, String, Accessor<R>)>,
}

impl<R> SchemaBuilder<R> {
    /// Creates an empty builder using permissive parsing
    pub fn new() -> Self {
        Self {
            mode: ParseMode::Permissive,
            fields: Vec::new(),
        }
    }

    /// Set how rule tags are parsed
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Register the next field
    ///
    /// An empty `tag` declares a field with no rules.
    pub fn field(mut self, name: &str, tag: &str, accessor: Accessor<R>) -> Self {
        self.fields
            .push((name.to_string(), tag.to_string(), accessor));
        self
    }

    /// Parse all tags and produce the schema
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidFieldName` or `RuleError::DuplicateField` for
    /// bad field declarations, and in strict mode any tag parse error.
    pub fn build(self) -> Result<Schema<R>, RuleError> {
        let mut fields: Vec<FieldSpec<R>> = Vec::with_capacity(self.fields.len());

        for (name, tag, accessor) in self.fields {
            let (name, rules) = compile_field(&name, &tag, self.mode, |candidate| {
                fields.iter().any(|spec| &spec.name == candidate)
            })?;
            fields.push(FieldSpec {
                name,
                rules,
                accessor,
            });
        }

        Ok(Schema { fields })
    }
}

impl<R> Default for SchemaBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a field declaration and parse its rule tag
///
/// `is_declared` reports whether a name is already taken in the schema.
pub(crate) fn compile_field(
    name: &str,
    tag: &str,
    mode: ParseMode,
    is_declared: impl Fn(&FieldName) -> bool,
) -> Result<(FieldName, RuleSet), RuleError> {
    let name =
        FieldName::new(name).ok_or_else(|| RuleError::InvalidFieldName(name.to_string()))?;

    if is_declared(&name) {
        return Err(RuleError::DuplicateField(name.to_string()));
    }

    let rules = RuleSet::parse(tag, mode)?;
    Ok((name, rules))
}
