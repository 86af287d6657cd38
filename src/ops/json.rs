//! JSON and numeric validity checks

use serde::de::DeserializeOwned;

use super::error::Result;
use super::guard;

/// Check whether the input is valid JSON.
///
/// Any decode failure is converted into `false`; this is the one place in
/// the crate where a collaborator error is caught instead of propagated.
pub fn is_json(input: &str) -> Result<bool> {
    guard::non_empty(input)?;

    Ok(serde_json::from_str::<serde_json::Value>(input).is_ok())
}

/// Check whether the input parses as a floating-point number.
///
/// Standard decimal notation, locale-independent.
pub fn is_number(input: &str) -> Result<bool> {
    guard::non_empty(input)?;

    Ok(input.parse::<f64>().is_ok())
}

/// Check whether the input parses as a 32-bit signed integer.
///
/// Range-limited: numeric strings that overflow `i32` return false.
pub fn is_integer(input: &str) -> Result<bool> {
    guard::non_empty(input)?;

    Ok(input.parse::<i32>().is_ok())
}

/// Deserialize a JSON string into `T`.
///
/// # Errors
/// Returns `EmptyInput` for an empty argument and `Deserialization` when
/// the input is malformed or does not match the shape of `T`.
pub fn deserialize_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    guard::non_empty(input)?;

    Ok(serde_json::from_str(input)?)
}
