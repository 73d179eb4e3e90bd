//! Splitting of input lines into command words.
//!
//! The shell has no quoting, escaping, or operators: a word is any maximal run
//! of characters that are not delimiters.

/// Characters separating words: space, tab, carriage return, newline and bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Splits `line` into words, in left-to-right order.
///
/// Runs of delimiters collapse and never produce empty words, so an empty or
/// all-delimiter line yields an empty vector.
pub fn split_into_tokens(line: &str) -> Vec<String> {
    line.split(|c: char| DELIMITERS.contains(&c))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
