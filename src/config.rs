//! Schema file parsing and validation

pub mod schema_toml;

pub use schema_toml::{FieldConfig, SchemaConfig, SchemaMeta};
