#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One record line per input record, in input order
//! 2. One summary line

use crate::engine::{ExecutionResult, RecordReport, ValidationOutcome};
use serde::Serialize;
use std::io::{self, Write};

/// JSONL output formatter
///
/// Formats execution results as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the execution result as JSONL
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();

        for report in &result.reports {
            if let Ok(json) = serde_json::to_string(&RecordLine::from_report(report)) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let summary = SummaryRecord {
            record_type: "summary",
            passed: result.passed(),
            records_checked: result.records_checked() as u64,
            valid: result.valid_count() as u64,
            invalid: result.invalid_count() as u64,
            errors: result.error_count() as u64,
        };

        if let Ok(json) = serde_json::to_string(&summary) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to `out`
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer, such as a closed pipe.
    pub fn write<W: Write>(&self, result: &ExecutionResult, out: &mut W) -> io::Result<()> {
        out.write_all(self.format(result).as_bytes())?;
        out.flush()
    }

    /// Write the formatted output to stdout
    ///
    /// # Errors
    ///
    /// See [`JsonlFormatter::write`].
    pub fn write_to_stdout(&self, result: &ExecutionResult) -> io::Result<()> {
        self.write(result, &mut io::stdout().lock())
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-record line for JSONL output
#[derive(Debug, Serialize)]
struct RecordLine<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    source: &'a str,
    line: usize,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<'a> RecordLine<'a> {
    fn from_report(report: &'a RecordReport) -> Self {
        let (status, field, rule, message) = match &report.outcome {
            Ok(ValidationOutcome::Valid) => ("valid", None, None, None),
            Ok(ValidationOutcome::Invalid(violation)) => (
                "invalid",
                Some(violation.field.as_str()),
                Some(violation.kind.as_str()),
                Some(violation.message.clone()),
            ),
            Err(e) => ("error", None, None, Some(e.to_string())),
        };

        RecordLine {
            record_type: "record",
            source: &report.source,
            line: report.line,
            status,
            field,
            rule,
            message,
        }
    }
}

/// Summary line for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    records_checked: u64,
    valid: u64,
    invalid: u64,
    errors: u64,
}
