//! Cryptographic digest helpers

use log::trace;
use md5::Md5;
use sha1::{Digest, Sha1};

use super::error::Result;
use super::guard;

/// Compute the MD5 digest of the input's UTF-8 bytes as uppercase hex.
///
/// The 16 digest bytes render as 32 hex characters in digest byte order.
pub fn md5_hex(input: &str) -> Result<String> {
    guard::non_empty(input)?;
    trace!("hashing {} bytes with MD5", input.len());

    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());

    Ok(hex::encode_upper(hasher.finalize()))
}

/// Compute the SHA-1 digest of the input's UTF-8 bytes as uppercase hex.
///
/// The 20 digest bytes render as 40 hex characters in digest byte order.
pub fn sha1_hex(input: &str) -> Result<String> {
    guard::non_empty(input)?;
    trace!("hashing {} bytes with SHA-1", input.len());

    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());

    Ok(hex::encode_upper(hasher.finalize()))
}
