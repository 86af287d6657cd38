//! Wrapping and conversion helpers

use std::error::Error;
use std::io::Cursor;

use super::error::Result;
use super::guard;

/// Wrap a string in a single-element vector.
pub fn wrap_as_list(input: &str) -> Result<Vec<String>> {
    guard::non_empty(input)?;

    Ok(vec![input.to_string()])
}

/// Wrap a string in a single-element fixed array.
pub fn wrap_as_array(input: &str) -> Result<[String; 1]> {
    guard::non_empty(input)?;

    Ok([input.to_string()])
}

/// UTF-8 encode a string into a byte vector.
pub fn to_utf8_bytes(input: &str) -> Result<Vec<u8>> {
    guard::non_empty(input)?;

    Ok(input.as_bytes().to_vec())
}

/// UTF-8 encode a string into a seekable, readable in-memory buffer.
///
/// The returned cursor starts at position 0 and implements `Read` and `Seek`.
pub fn to_byte_stream(input: &str) -> Result<Cursor<Vec<u8>>> {
    guard::non_empty(input)?;

    Ok(Cursor::new(input.as_bytes().to_vec()))
}

/// Wrap a string as the message of a boxed error value.
pub fn into_error(input: &str) -> Result<Box<dyn Error + Send + Sync>> {
    guard::non_empty(input)?;

    Ok(Box::<dyn Error + Send + Sync>::from(input.to_string()))
}

/// Build an error value of type `E` directly from the message.
///
/// `E` declares how it is constructed from a message via `From<String>`,
/// so no runtime downcast is involved.
pub fn into_typed_error<E: From<String>>(input: &str) -> Result<E> {
    guard::non_empty(input)?;

    Ok(E::from(input.to_string()))
}
