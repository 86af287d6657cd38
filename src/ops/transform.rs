//! Reversal and counting transformations

use super::error::Result;
use super::guard;

/// Reverse the input's character order.
///
/// Operates on Unicode scalar values, so multi-byte characters survive
/// intact. Combining marks end up on the preceding base character after
/// reversal; grapheme clusters are not kept together.
pub fn reverse(input: &str) -> Result<String> {
    guard::non_empty(input)?;

    Ok(input.chars().rev().collect())
}

/// Reverse the order of whitespace-delimited words.
///
/// Words are joined with single spaces in the output; surrounding and
/// repeated whitespace is not preserved.
pub fn reverse_words(input: &str) -> Result<String> {
    guard::non_empty(input)?;

    let words: Vec<&str> = input.split_whitespace().rev().collect();

    Ok(words.join(" "))
}

/// Count non-overlapping occurrences of a substring.
///
/// Each match advances the scan past the full matched length, so
/// overlapping candidates are not counted.
pub fn count_occurrences(input: &str, needle: &str) -> Result<usize> {
    guard::non_empty(input)?;
    guard::non_empty(needle)?;

    Ok(input.matches(needle).count())
}
