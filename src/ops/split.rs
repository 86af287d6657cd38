//! Typed split-and-parse

use std::any::type_name;
use std::str::FromStr;

use super::error::{Result, StringexError};
use super::guard;

/// Split a string on a literal separator and parse every part as `T`.
///
/// The separator is matched verbatim, never as a pattern. Each part is
/// parsed through `T`'s `FromStr` implementation.
///
/// # Arguments
/// * `input` - The string to split
/// * `separator` - Literal separator between parts
/// * `ignore_nonmatching` - When true, parts that fail to parse are
///   silently dropped instead of failing the whole call
///
/// # Errors
/// Returns `EmptyInput` if `input` or `separator` is empty, and
/// `ParseMismatch` naming the expected type and the offending part when a
/// part fails to parse and `ignore_nonmatching` is false.
pub fn split_parsed<T: FromStr>(
    input: &str,
    separator: &str,
    ignore_nonmatching: bool,
) -> Result<Vec<T>> {
    guard::non_empty(input)?;
    guard::non_empty(separator)?;

    let mut result = Vec::new();

    for part in input.split(separator) {
        match part.parse::<T>() {
            Ok(value) => result.push(value),
            Err(_) if ignore_nonmatching => continue,
            Err(_) => {
                return Err(StringexError::ParseMismatch {
                    expected: type_name::<T>(),
                    part: part.to_string(),
                });
            }
        }
    }

    Ok(result)
}
