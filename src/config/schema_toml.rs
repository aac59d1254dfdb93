//! Parsing and validation for fieldtags.toml schema files

use crate::error::ConfigError;
use crate::types::{FieldName, ParseMode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Main configuration struct for fieldtags.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Schema metadata
    pub schema: SchemaMeta,

    /// Field declarations, in validation order
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl SchemaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: SchemaConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.schema.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported schema version '{}'. Expected '1'",
                self.schema.version
            )));
        }

        if self.fields.is_empty() {
            return Err(ConfigError::Validation(
                "No fields declared. Add [[fields]] entries to fieldtags.toml.".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if FieldName::new(field.name.as_str()).is_none() {
                return Err(ConfigError::Validation(format!(
                    "Invalid field name '{}': use letters, digits, '-' or '_'",
                    field.name
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Field '{}' is declared more than once",
                    field.name
                )));
            }
        }

        Ok(())
    }
}

/// Schema metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// Record type name, used in reports
    #[serde(default = "default_name")]
    pub name: String,

    /// How rule tags are parsed
    #[serde(default)]
    pub mode: ParseMode,
}

fn default_name() -> String {
    "Record".to_string()
}

/// A single field declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Field name, matched against JSON object keys
    pub name: String,

    /// Rule tag, e.g. "min=2,max=32"; empty means no rules
    #[serde(default)]
    pub rules: String,
}
