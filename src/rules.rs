#![forbid(unsafe_code)]

//! Rule tags: tokenizing, parsing, and the built-in checkers

pub mod builtin;
mod rule;
mod rule_set;
mod token;
pub mod tokenizer;

// Re-export core types
pub use rule::{Checker, Violation};
pub use rule_set::RuleSet;
pub use token::RuleToken;
pub use tokenizer::tokenize;
