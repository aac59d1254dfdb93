#![forbid(unsafe_code)]

//! Rule-tag listing formatters
//!
//! Used by `fieldtags explain` to show how a tag is tokenized and which
//! tokens take effect. Supports both human-readable and JSONL output.

use crate::rules::{RuleToken, tokenize};
use serde::Serialize;
use std::io::{self, Write};

/// How one raw token was interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    /// 1-indexed position within the tag
    pub position: usize,
    /// Raw token text, untrimmed
    pub raw: String,
    /// Parsed token, or None when the token is ignored
    pub parsed: Option<RuleToken>,
}

/// Interpret every token of `tag` the way permissive parsing does
pub fn list_tokens(tag: &str) -> Vec<TokenEntry> {
    tokenize(tag)
        .enumerate()
        .map(|(index, raw)| TokenEntry {
            position: index + 1,
            raw: raw.to_string(),
            parsed: RuleToken::parse_permissive(raw),
        })
        .collect()
}

fn argument(token: &RuleToken) -> Option<usize> {
    match token {
        RuleToken::MinLength(n) | RuleToken::MaxLength(n) => Some(*n),
        RuleToken::Required | RuleToken::Email => None,
    }
}

fn write_out<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Human-readable formatter for token listings
pub struct RuleListingHumanFormatter;

impl RuleListingHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleListingHumanFormatter
    }

    /// Format a token listing for human consumption
    pub fn format(&self, tag: &str, entries: &[TokenEntry]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rule tag {:?} ({} tokens):\n", tag, entries.len()));

        for entry in entries {
            let meaning = match &entry.parsed {
                Some(token) => match argument(token) {
                    Some(n) => format!("{} ({})", token.kind(), n),
                    None => token.kind().to_string(),
                },
                None => "ignored (unknown token)".to_string(),
            };
            output.push_str(&format!(
                "  {}. {:?} -> {}\n",
                entry.position, entry.raw, meaning
            ));
        }

        output
    }

    /// Write the formatted output to stdout
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing, such as a closed pipe.
    pub fn write_to_stdout(&self, tag: &str, entries: &[TokenEntry]) -> io::Result<()> {
        write_out(&mut io::stdout().lock(), &self.format(tag, entries))
    }
}

impl Default for RuleListingHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for one token
#[derive(Debug, Serialize)]
struct JsonlToken<'a> {
    position: usize,
    raw: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    argument: Option<usize>,
}

/// JSONL formatter for token listings
pub struct RuleListingJsonlFormatter;

impl RuleListingJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleListingJsonlFormatter
    }

    /// Format a token listing as JSONL, one object per token
    pub fn format(&self, entries: &[TokenEntry]) -> String {
        let mut output = String::new();

        for entry in entries {
            let line = JsonlToken {
                position: entry.position,
                raw: &entry.raw,
                status: if entry.parsed.is_some() {
                    "parsed"
                } else {
                    "ignored"
                },
                kind: entry.parsed.map(|token| token.kind().as_str()),
                argument: entry.parsed.as_ref().and_then(argument),
            };

            if let Ok(json) = serde_json::to_string(&line) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing, such as a closed pipe.
    pub fn write_to_stdout(&self, entries: &[TokenEntry]) -> io::Result<()> {
        write_out(&mut io::stdout().lock(), &self.format(entries))
    }
}

impl Default for RuleListingJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_tokens() {
        let entries = list_tokens("min=2, max=32,email");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].parsed, Some(RuleToken::MinLength(2)));
        assert_eq!(entries[1].raw, " max=32");
        assert_eq!(entries[1].parsed, None);
        assert_eq!(entries[2].position, 3);
        assert_eq!(entries[2].parsed, Some(RuleToken::Email));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_out_reports_closed_pipe() {
        let err = write_out(&mut ClosedPipe, "1. \"min=2\"\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mut buffer = Vec::new();
        write_out(&mut buffer, "ok\n").unwrap();
        assert_eq!(buffer, b"ok\n");
    }

    #[test]
    fn test_list_tokens_empty_tag() {
        assert!(list_tokens("").is_empty());
    }

    #[test]
    fn test_human_formatter() {
        let entries = list_tokens("min=2, max=32,required");
        let output = RuleListingHumanFormatter::new().format("min=2, max=32,required", &entries);

        assert!(output.contains("Rule tag \"min=2, max=32,required\" (3 tokens):"));
        assert!(output.contains("1. \"min=2\" -> min_length (2)"));
        assert!(output.contains("2. \" max=32\" -> ignored (unknown token)"));
        assert!(output.contains("3. \"required\" -> required"));
    }

    #[test]
    fn test_jsonl_formatter() {
        let entries = list_tokens("max=32,bogus");
        let output = RuleListingJsonlFormatter::new().format(&entries);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["position"], 1);
        assert_eq!(first["status"], "parsed");
        assert_eq!(first["kind"], "max_length");
        assert_eq!(first["argument"], 32);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["raw"], "bogus");
        assert_eq!(second["status"], "ignored");
        assert!(second.get("kind").is_none());
    }
}
