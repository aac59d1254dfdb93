#![forbid(unsafe_code)]

//! Parsed rule tags
//!
//! A RuleSet is a rule tag parsed once into its ordered tokens, ready to be
//! evaluated against any number of values.

use crate::error::RuleError;
use crate::rules::tokenizer::tokenize;
use crate::rules::{RuleToken, Violation};
use crate::types::ParseMode;
use tracing::trace;

/// An ordered, parsed rule tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    tag: String,
    tokens: Vec<RuleToken>,
    ignored: Vec<String>,
}

impl RuleSet {
    /// Parse a rule tag according to `mode`
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first `RuleError` raised by a token.
    /// Permissive parsing never fails.
    pub fn parse(tag: &str, mode: ParseMode) -> Result<Self, RuleError> {
        match mode {
            ParseMode::Permissive => Ok(Self::parse_permissive(tag)),
            ParseMode::Strict => {
                let tokens = tokenize(tag)
                    .map(RuleToken::parse_strict)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self {
                    tag: tag.to_string(),
                    tokens,
                    ignored: Vec::new(),
                })
            }
        }
    }

    /// Parse a rule tag, ignoring tokens outside the vocabulary
    pub fn parse_permissive(tag: &str) -> Self {
        let mut tokens = Vec::new();
        let mut ignored = Vec::new();

        for raw in tokenize(tag) {
            match RuleToken::parse_permissive(raw) {
                Some(token) => tokens.push(token),
                None => ignored.push(raw.to_string()),
            }
        }

        Self {
            tag: tag.to_string(),
            tokens,
            ignored,
        }
    }

    /// Returns the original tag text
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the parsed tokens in evaluation order
    pub fn tokens(&self) -> &[RuleToken] {
        &self.tokens
    }

    /// Returns the raw tokens that were ignored during permissive parsing
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Returns true when no rule will be evaluated
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of parsed tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Evaluate every token against `value`, stopping at the first failure
    pub fn check(&self, field: &str, value: &str) -> Result<(), Violation> {
        for token in &self.tokens {
            trace!(field, %token, "evaluating rule");
            token.check(field, value)?;
        }
        Ok(())
    }
}
