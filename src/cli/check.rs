//! Check command implementation
//!
//! This module implements the `fieldtags check` command, which:
//! - Loads and compiles the schema from fieldtags.toml
//! - Reads JSON Lines records from files or stdin
//! - Validates every record in parallel
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{
    EXIT_ERROR, EXIT_INVALID, EXIT_SUCCESS, exit_code_for, load_schema, resolve_color,
};
use crate::engine::{ExecutionEngine, ExecutionResult};
use crate::engine::record_reader::read_sources;
use crate::error::FieldtagsError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::path::Path;
use termcolor::StandardStream;
use tracing::{debug, info};

/// Run the check command
///
/// # Arguments
///
/// * `records` - Record files; empty or `-` means stdin
/// * `schema_path` - Path to the schema file
/// * `format` - Output format (human or JSONL)
/// * `color` - Color choice for human output
///
/// # Returns
///
/// Exit code:
/// - 0: Success (all records valid)
/// - 1: At least one record violates a rule
/// - 2: Error (I/O error, or a record that is not valid flat JSON)
/// - 3: Parse error (invalid schema or strict-mode rule tag)
pub fn run_check(
    records: &[String],
    schema_path: &Path,
    format: OutputFormat,
    color: ColorChoice,
) -> i32 {
    match check(records, schema_path) {
        Ok(result) => {
            if let Err(e) = write_result(&result, format, color) {
                eprintln!("Error: {}", e);
                return exit_code_for(&FieldtagsError::Io(e));
            }
            if result.error_count() > 0 {
                EXIT_ERROR
            } else if result.invalid_count() > 0 {
                EXIT_INVALID
            } else {
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Load the schema and validate every record
///
/// # Errors
///
/// Returns an error if the schema cannot be loaded or a record source cannot
/// be read. Per-record problems are reported inside the result.
pub fn check(records: &[String], schema_path: &Path) -> Result<ExecutionResult, FieldtagsError> {
    let schema = load_schema(schema_path)?;
    debug!(
        schema = schema.name(),
        fields = schema.fields().len(),
        "Loaded schema"
    );

    let lines = read_sources(records)?;
    info!(records = lines.len(), "Checking records");

    let engine = ExecutionEngine::new(schema);
    Ok(engine.execute(lines))
}

fn write_result(
    result: &ExecutionResult,
    format: OutputFormat,
    color: ColorChoice,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(resolve_color(color));
            HumanFormatter::new().write(result, &mut stdout)
        }
        OutputFormat::Jsonl => JsonlFormatter::new().write_to_stdout(result),
    }
}
