//! Querystring parsing

use std::collections::BTreeMap;

use log::debug;

use super::error::{Result, StringexError};
use super::guard;

/// Parse a `key=value` querystring into an ordered map.
///
/// Pairs are separated by `;`. When no `;` is present the whole input is
/// treated as a single pair. Empty segments between separators are
/// skipped.
///
/// # Errors
/// - `EmptyInput` for an empty argument.
/// - `QueryFormat` when the input contains no `=` at all, or when a
///   segment does not split into exactly one key and one value.
/// - `DuplicateKey` when a key repeats.
pub fn parse_query_string(input: &str) -> Result<BTreeMap<String, String>> {
    guard::non_empty(input)?;

    if !input.contains('=') {
        return Err(StringexError::QueryFormat(
            "no key=value separator present".to_string(),
        ));
    }

    let mut result = BTreeMap::new();

    for part in input.split(';').filter(|part| !part.is_empty()) {
        let pieces: Vec<&str> = part.split('=').collect();
        if pieces.len() != 2 {
            return Err(StringexError::QueryFormat(format!(
                "segment {part:?} is not a single key=value pair"
            )));
        }

        let (key, value) = (pieces[0], pieces[1]);
        if result.contains_key(key) {
            return Err(StringexError::DuplicateKey(key.to_string()));
        }
        result.insert(key.to_string(), value.to_string());
    }

    debug!("parsed {} querystring pairs", result.len());

    Ok(result)
}
