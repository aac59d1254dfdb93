#![forbid(unsafe_code)]

//! Rule-tag tokenizer

/// Separator between tokens in a rule tag
pub const DELIMITER: char = ',';

/// Split a rule tag into its tokens, left to right
///
/// Empty pieces are dropped and no whitespace is trimmed, so `"min=2, max=32"`
/// yields `" max=32"` as its second token.
pub fn tokenize(tag: &str) -> impl Iterator<Item = &str> {
    tag.split(DELIMITER).filter(|token| !token.is_empty())
}
