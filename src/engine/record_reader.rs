//! Reading JSON Lines record input
//!
//! Records are read one per line from files or standard input. Blank lines
//! are skipped; line numbers are 1-indexed and refer to the original input.
//! Lines are kept as bytes so that a line with invalid UTF-8 is reported as
//! a per-record error rather than aborting the whole read.

use crate::error::InputError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Path argument meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Source name reported for records read from standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// One raw, not yet decoded record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    /// File the record came from, or `<stdin>`
    pub source: String,

    /// Line number within the source (1-indexed)
    pub line: usize,

    /// Raw line content, without the line terminator
    pub bytes: Vec<u8>,
}

impl RecordLine {
    /// Creates a record line from text
    pub fn new(source: impl Into<String>, line: usize, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            line,
            bytes: text.into().into_bytes(),
        }
    }

    /// Returns the line as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns `InputError::Encoding` if the line is not valid UTF-8.
    pub fn text(&self) -> Result<&str, InputError> {
        std::str::from_utf8(&self.bytes).map_err(|source| InputError::Encoding {
            line: self.line,
            source,
        })
    }
}

/// Read all non-blank lines of `reader` as records
///
/// # Errors
///
/// Returns any I/O error raised while reading.
pub fn read_records<R: BufRead>(mut reader: R, source: &str) -> io::Result<Vec<RecordLine>> {
    let mut records = Vec::new();
    let mut line = 0;

    loop {
        let mut bytes = Vec::new();
        if reader.read_until(b'\n', &mut bytes)? == 0 {
            break;
        }
        line += 1;

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        if bytes.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        records.push(RecordLine {
            source: source.to_string(),
            line,
            bytes,
        });
    }

    debug!(source, count = records.len(), "read records");
    Ok(records)
}

/// Read records from every path in order
///
/// An empty list, or the path `-`, reads standard input.
///
/// # Errors
///
/// Returns an I/O error if a file cannot be opened or read.
pub fn read_sources(paths: &[String]) -> io::Result<Vec<RecordLine>> {
    if paths.is_empty() {
        return read_stdin();
    }

    let mut all_records = Vec::new();
    for path in paths {
        let records = if path == STDIN_PATH {
            read_stdin()?
        } else {
            read_file(Path::new(path))?
        };
        all_records.extend(records);
    }

    Ok(all_records)
}

fn read_stdin() -> io::Result<Vec<RecordLine>> {
    read_records(io::stdin().lock(), STDIN_SOURCE)
}

fn read_file(path: &Path) -> io::Result<Vec<RecordLine>> {
    let file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open {}: {}", path.display(), e))
    })?;
    read_records(BufReader::new(file), &path.display().to_string())
}
