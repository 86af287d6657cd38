//! Custom error types for the stringex crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum StringexError {
    /// A required string argument was empty.
    #[error("input string must not be empty")]
    EmptyInput,

    /// An element could not be parsed as the requested type during a typed split.
    #[error("part {part:?} does not parse as {expected}")]
    ParseMismatch {
        expected: &'static str,
        part: String,
    },

    /// A caller-supplied regular expression failed to compile.
    #[error("invalid regular expression: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON input was malformed or did not match the requested shape.
    #[error("JSON deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// A querystring or one of its segments was malformed.
    #[error("invalid querystring: {0}")]
    QueryFormat(String),

    /// A key appeared more than once while parsing a querystring.
    #[error("duplicate querystring key: {0}")]
    DuplicateKey(String),
}

/// A convenience `Result` type alias using the crate's `StringexError` type.
pub type Result<T> = std::result::Result<T, StringexError>;
