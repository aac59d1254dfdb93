#![forbid(unsafe_code)]

//! Parallel batch validation
//!
//! Records are independent, so the ExecutionEngine decodes and validates
//! them in parallel using rayon. Reports come back in input order.

use crate::engine::dynamic::DynamicSchema;
use crate::engine::record_reader::RecordLine;
use crate::engine::validator::ValidationOutcome;
use crate::error::InputError;
use rayon::prelude::*;
use serde_json::Value;

/// Result of validating a single input record
#[derive(Debug)]
pub struct RecordReport {
    /// File the record came from
    pub source: String,

    /// Line number within the source (1-indexed)
    pub line: usize,

    /// Outcome, or why the record could not be validated
    pub outcome: Result<ValidationOutcome, InputError>,
}

impl RecordReport {
    /// Returns true if the record was validated and passed
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, Ok(ValidationOutcome::Valid))
    }
}

/// Result of validating a batch of records
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// One report per input record, in input order
    pub reports: Vec<RecordReport>,
}

impl ExecutionResult {
    /// Number of records checked
    pub fn records_checked(&self) -> usize {
        self.reports.len()
    }

    /// Number of records that passed
    pub fn valid_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_valid()).count()
    }

    /// Number of records with a rule violation
    pub fn invalid_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, Ok(ValidationOutcome::Invalid(_))))
            .count()
    }

    /// Number of records that could not be validated
    pub fn error_count(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_err()).count()
    }

    /// Returns true if every record passed
    pub fn passed(&self) -> bool {
        self.reports.iter().all(RecordReport::is_valid)
    }
}

/// Execution engine that validates records against one schema
pub struct ExecutionEngine {
    schema: DynamicSchema,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine for the provided schema
    pub fn new(schema: DynamicSchema) -> Self {
        Self { schema }
    }

    /// Returns the schema records are validated against
    pub fn schema(&self) -> &DynamicSchema {
        &self.schema
    }

    /// Validate all records in parallel
    pub fn execute(&self, records: Vec<RecordLine>) -> ExecutionResult {
        let reports = records
            .par_iter()
            .map(|record| self.execute_record(record))
            .collect();

        ExecutionResult { reports }
    }

    /// Decode and validate a single record
    fn execute_record(&self, record: &RecordLine) -> RecordReport {
        let outcome = record
            .text()
            .and_then(|text| {
                serde_json::from_str::<Value>(text).map_err(|source| InputError::Json {
                    line: record.line,
                    source,
                })
            })
            .and_then(|value| self.schema.validate(&value));

        RecordReport {
            source: record.source.clone(),
            line: record.line,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParseMode;

    fn engine() -> ExecutionEngine {
        let mut schema = DynamicSchema::new("User", ParseMode::Permissive);
        schema.add_field("Name", "min=2,max=32").unwrap();
        schema.add_field("Email", "required,email").unwrap();
        ExecutionEngine::new(schema)
    }

    fn line(line: usize, text: &str) -> RecordLine {
        RecordLine::new("users.jsonl", line, text)
    }

    #[test]
    fn test_execute_empty_batch() {
        let result = engine().execute(Vec::new());
        assert_eq!(result.records_checked(), 0);
        assert!(result.passed());
    }

    #[test]
    fn test_execute_mixed_batch() {
        let records = vec![
            line(1, r#"{"Name":"Alice","Email":"alice@example.com"}"#),
            line(2, r#"{"Name":"A","Email":"aliceexample.com"}"#),
            line(3, r#"not json"#),
            line(4, r#"["Alice"]"#),
        ];

        let result = engine().execute(records);
        assert_eq!(result.records_checked(), 4);
        assert_eq!(result.valid_count(), 1);
        assert_eq!(result.invalid_count(), 1);
        assert_eq!(result.error_count(), 2);
        assert!(!result.passed());

        assert!(result.reports[0].is_valid());
        match &result.reports[1].outcome {
            Ok(outcome) => assert_eq!(
                outcome.message(),
                Some("Name must be at least 2 characters long")
            ),
            Err(e) => panic!("unexpected error: {}", e),
        }
        assert!(matches!(
            result.reports[2].outcome,
            Err(InputError::Json { line: 3, .. })
        ));
        assert!(matches!(
            result.reports[3].outcome,
            Err(InputError::NotARecord { .. })
        ));
    }

    #[test]
    fn test_execute_invalid_utf8_is_per_record_error() {
        let records = vec![
            line(1, r#"{"Name":"Alice","Email":"alice@example.com"}"#),
            RecordLine {
                source: "users.jsonl".to_string(),
                line: 2,
                bytes: vec![b'{', 0xFF, b'}'],
            },
        ];

        let result = engine().execute(records);
        assert_eq!(result.records_checked(), 2);
        assert_eq!(result.valid_count(), 1);
        assert_eq!(result.error_count(), 1);
        assert!(matches!(
            result.reports[1].outcome,
            Err(InputError::Encoding { line: 2, .. })
        ));
    }

    #[test]
    fn test_execute_preserves_input_order() {
        let records: Vec<_> = (1..=200)
            .map(|n| {
                let name = if n % 2 == 0 { "Alice" } else { "A" };
                line(
                    n,
                    &format!(r#"{{"Name":"{}","Email":"alice@example.com"}}"#, name),
                )
            })
            .collect();

        let result = engine().execute(records);
        for (index, report) in result.reports.iter().enumerate() {
            assert_eq!(report.line, index + 1);
            assert_eq!(report.is_valid(), report.line % 2 == 0);
        }
        assert_eq!(result.valid_count(), 100);
    }
}
