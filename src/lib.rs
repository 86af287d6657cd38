//! # stringex
//!
//! Stateless string manipulation helpers: wrapping, Levenshtein distance,
//! regex-based validation, MD5/SHA-1 hashing, whitespace normalization,
//! and querystring parsing.
//!
//! Every operation is an independent transformation of an input string into
//! an output value. All string inputs are guarded against being empty before
//! any work happens, so the functions return [`ops::Result`] throughout.
pub mod ops;

// Re-export the public surface for convenience
pub use ops::{
    Result, StringexError, WhitespaceKind, consolidate_spaces, count_occurrences,
    deserialize_json, into_error, into_typed_error, is_email, is_integer, is_ipv4, is_ipv6,
    is_json, is_number, levenshtein_distance, levenshtein_percentage, md5_hex,
    normalize_whitespace, parse_query_string, regex_extract, regex_match, reverse,
    reverse_words, sha1_hex, split_parsed, to_byte_stream, to_utf8_bytes, wrap_as_array,
    wrap_as_list,
};
