//! Explain command implementation
//!
//! Shows how a rule tag is split into tokens and what each token means.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_PARSE_ERROR, EXIT_SUCCESS, exit_code_for};
use crate::error::FieldtagsError;
use crate::output::{RuleListingHumanFormatter, RuleListingJsonlFormatter, list_tokens};
use crate::rules::RuleSet;
use crate::types::ParseMode;

/// Run the explain command
///
/// In strict mode the tag is parsed first, and an unknown token or
/// malformed argument is reported with exit code 3.
pub fn run_explain(tag: &str, strict: bool, format: OutputFormat) -> i32 {
    if strict {
        if let Err(e) = RuleSet::parse(tag, ParseMode::Strict) {
            eprintln!("Error: {}", e);
            return EXIT_PARSE_ERROR;
        }
    }

    let entries = list_tokens(tag);
    let written = match format {
        OutputFormat::Human => RuleListingHumanFormatter::new().write_to_stdout(tag, &entries),
        OutputFormat::Jsonl => RuleListingJsonlFormatter::new().write_to_stdout(&entries),
    };

    match written {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&FieldtagsError::Io(e))
        }
    }
}
