//! Field inspection, validation, and batch execution

pub mod dynamic;
pub mod executor;
pub mod inspector;
pub mod record_reader;
pub mod validator;

pub use dynamic::{DynamicField, DynamicSchema};
pub use executor::{ExecutionEngine, ExecutionResult, RecordReport};
pub use inspector::{Accessor, FieldDescriptor, Record, Schema, SchemaBuilder};
pub use validator::{ValidationOutcome, validate, validate_fields};
