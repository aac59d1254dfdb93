#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! One line per record, followed by a summary. Invalid records use the
//! `Validation error: <message>` wording of the demo harness.

use crate::engine::{ExecutionResult, RecordReport, ValidationOutcome};
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Human-readable formatter for execution results
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the report to a color-capable writer
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn write<W: WriteColor>(&self, result: &ExecutionResult, out: &mut W) -> io::Result<()> {
        for report in &result.reports {
            self.write_report(report, out)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Checked {} records: {} valid, {} invalid, {} errors",
            result.records_checked(),
            result.valid_count(),
            result.invalid_count(),
            result.error_count()
        )?;

        if result.passed() {
            write_colored(out, Color::Green, "Check PASSED")?;
            writeln!(out, ": all records valid")?;
        } else {
            write_colored(out, Color::Red, "Check FAILED")?;
            writeln!(
                out,
                ": {} record(s) rejected",
                result.invalid_count() + result.error_count()
            )?;
        }

        Ok(())
    }

    /// Format the report as plain text without color
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut buffer = Buffer::no_color();
        if self.write(result, &mut buffer).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    fn write_report<W: WriteColor>(&self, report: &RecordReport, out: &mut W) -> io::Result<()> {
        write!(out, "{}:{}: ", report.source, report.line)?;
        match &report.outcome {
            Ok(ValidationOutcome::Valid) => {
                write_colored(out, Color::Green, "valid")?;
                writeln!(out)
            }
            Ok(ValidationOutcome::Invalid(violation)) => {
                write_colored(out, Color::Red, "Validation error")?;
                writeln!(out, ": {}", violation.message)
            }
            Err(e) => {
                write_colored(out, Color::Yellow, "error")?;
                writeln!(out, ": {}", e)
            }
        }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_colored<W: WriteColor>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::rules::Violation;
    use crate::types::RuleKind;

    fn report(line: usize, outcome: Result<ValidationOutcome, InputError>) -> RecordReport {
        RecordReport {
            source: "users.jsonl".to_string(),
            line,
            outcome,
        }
    }

    #[test]
    fn test_format_all_valid() {
        let result = ExecutionResult {
            reports: vec![
                report(1, Ok(ValidationOutcome::Valid)),
                report(2, Ok(ValidationOutcome::Valid)),
            ],
        };

        let output = HumanFormatter::new().format(&result);
        assert!(output.contains("users.jsonl:1: valid"));
        assert!(output.contains("users.jsonl:2: valid"));
        assert!(output.contains("Checked 2 records: 2 valid, 0 invalid, 0 errors"));
        assert!(output.contains("Check PASSED"));
    }

    #[test]
    fn test_format_invalid_record() {
        let violation = Violation::new(
            "Name",
            RuleKind::MinLength,
            "Name must be at least 2 characters long",
        );
        let result = ExecutionResult {
            reports: vec![report(3, Ok(ValidationOutcome::Invalid(violation)))],
        };

        let output = HumanFormatter::new().format(&result);
        assert!(output.contains(
            "users.jsonl:3: Validation error: Name must be at least 2 characters long"
        ));
        assert!(output.contains("Check FAILED: 1 record(s) rejected"));
    }

    #[test]
    fn test_format_input_error() {
        let result = ExecutionResult {
            reports: vec![report(
                1,
                Err(InputError::NestedValue {
                    field: "Email".to_string(),
                }),
            )],
        };

        let output = HumanFormatter::new().format(&result);
        assert!(output.contains("users.jsonl:1: error: Field 'Email' holds a nested value"));
        assert!(output.contains("0 valid, 0 invalid, 1 errors"));
    }

    #[test]
    fn test_format_has_no_escape_codes() {
        let result = ExecutionResult {
            reports: vec![report(1, Ok(ValidationOutcome::Valid))],
        };
        let output = HumanFormatter::new().format(&result);
        assert!(!output.contains('\u{1b}'));
    }
}
