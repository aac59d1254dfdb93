//! Initialize a fieldtags project
//!
//! Writes a starter `fieldtags.toml` describing the sample `User` record.

use crate::cli::args::DEFAULT_SCHEMA_PATH;
use std::fs;
use std::path::Path;

/// Default content for fieldtags.toml
const DEFAULT_SCHEMA_TOML: &str = r#"[schema]
version = "1"
name = "User"

# "permissive" ignores unknown rule tokens and treats malformed numbers as 0.
# "strict" rejects both when the schema is loaded.
mode = "permissive"

# Rule tags are comma separated, without spaces:
#   min=<n>    at least n characters
#   max=<n>    at most n characters
#   required   must not be empty
#   email      must look like a lowercase email address

[[fields]]
name = "Name"
rules = "min=2,max=32"

[[fields]]
name = "Email"
rules = "required,email"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of init command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InitResult {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files that were overwritten
    pub overwritten: Vec<String>,
}

/// Run the init command in the current directory
///
/// # Arguments
/// * `force` - If true, overwrite an existing file. If false, skip it.
pub fn run_init(force: bool) -> Result<InitResult, InitError> {
    run_init_at(Path::new(DEFAULT_SCHEMA_PATH), force)
}

/// Run the init command against an explicit path
pub fn run_init_at(path: &Path, force: bool) -> Result<InitResult, InitError> {
    let mut result = InitResult::default();
    let display = path.display().to_string();

    if path.exists() {
        if force {
            fs::write(path, DEFAULT_SCHEMA_TOML)?;
            result.overwritten.push(display);
        } else {
            result.skipped.push(display);
        }
    } else {
        fs::write(path, DEFAULT_SCHEMA_TOML)?;
        result.created.push(display);
    }

    Ok(result)
}

/// Print a summary of what init did
pub fn print_summary(result: &InitResult) {
    for file in &result.created {
        println!("Created {}", file);
    }
    for file in &result.overwritten {
        println!("Overwrote {}", file);
    }
    for file in &result.skipped {
        println!("Skipped {} (already exists, use --force to overwrite)", file);
    }
}
