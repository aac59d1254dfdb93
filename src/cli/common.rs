//! Common helper functions shared across CLI commands

use crate::cli::args::ColorChoice;
use crate::config::SchemaConfig;
use crate::engine::DynamicSchema;
use crate::error::FieldtagsError;
use std::io::IsTerminal;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load a schema file and compile it
///
/// # Errors
///
/// Returns `FieldtagsError::Config` if the file is missing or invalid, and
/// `FieldtagsError::Rule` if a field declaration or (in strict mode) a rule
/// tag is rejected.
pub(crate) fn load_schema(path: &Path) -> Result<DynamicSchema, FieldtagsError> {
    if !path.exists() {
        return Err(FieldtagsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!(
                "{} not found. Run 'fieldtags init' to create it.",
                path.display()
            ),
        )));
    }

    let config = SchemaConfig::load(path)?;
    Ok(DynamicSchema::from_config(&config)?)
}

/// Exit code for an error raised while running a command
pub(crate) fn exit_code_for(error: &FieldtagsError) -> i32 {
    match error {
        FieldtagsError::Config(crate::error::ConfigError::Io(_)) => EXIT_ERROR,
        FieldtagsError::Config(_) | FieldtagsError::Rule(_) => EXIT_PARSE_ERROR,
        FieldtagsError::Input(_) | FieldtagsError::Io(_) => EXIT_ERROR,
    }
}

/// Resolve the `--color` flag for stdout
pub fn resolve_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if std::io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}
