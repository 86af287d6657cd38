//! Regex matching, extraction, and fixed-pattern validators

use std::sync::OnceLock;

use regex::Regex;

use super::error::Result;
use super::guard;

/// Compiled dotted-quad IPv4 pattern.
///
/// Deliberately unanchored: word boundaries mean a string merely
/// containing a valid address matches too.
static IPV4_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Compiled IPv6 pattern covering full, compressed (`::`), IPv4-mapped,
/// and link-local (`fe80::...%zone`) forms.
static IPV6_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Compiled full-string email pattern.
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn ipv4_regex() -> &'static Regex {
    IPV4_PATTERN.get_or_init(|| {
        Regex::new(r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b")
            .expect("Invalid IPv4 regex pattern")
    })
}

fn ipv6_regex() -> &'static Regex {
    IPV6_PATTERN.get_or_init(|| {
        Regex::new(
            r"(([0-9a-fA-F]{1,4}:){7,7}[0-9a-fA-F]{1,4}|([0-9a-fA-F]{1,4}:){1,7}:|([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}|([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}|([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}|([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}|([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}|[0-9a-fA-F]{1,4}:((:[0-9a-fA-F]{1,4}){1,6})|:((:[0-9a-fA-F]{1,4}){1,7}|:)|fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]{1,}|::(ffff(:0{1,4}){0,1}:){0,1}((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])|([0-9a-fA-F]{1,4}:){1,4}:((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9]))",
        )
        .expect("Invalid IPv6 regex pattern")
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
            .expect("Invalid email regex pattern")
    })
}

/// Check whether a pattern matches anywhere in the input.
///
/// The pattern is compiled per call; use the dedicated validators for the
/// fixed patterns this crate ships.
///
/// # Errors
/// Returns `EmptyInput` for empty arguments and `Pattern` if the pattern
/// does not compile.
pub fn regex_match(input: &str, pattern: &str) -> Result<bool> {
    guard::non_empty(input)?;
    guard::non_empty(pattern)?;

    let re = Regex::new(pattern)?;

    Ok(re.is_match(input))
}

/// Apply a pattern once and collect the match and its capture groups.
///
/// Returns the full match followed by each capture group's text in group
/// order. Groups that did not participate in the match render as empty
/// strings. Returns an empty vector when nothing matches.
///
/// # Errors
/// Returns `EmptyInput` for empty arguments and `Pattern` if the pattern
/// does not compile.
pub fn regex_extract(input: &str, pattern: &str) -> Result<Vec<String>> {
    guard::non_empty(input)?;
    guard::non_empty(pattern)?;

    let re = Regex::new(pattern)?;

    let Some(captures) = re.captures(input) else {
        return Ok(Vec::new());
    };

    Ok(captures
        .iter()
        .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
        .collect())
}

/// Check whether the input contains a dotted-quad IPv4 address.
///
/// Each octet must be 0-255. The match is bounded by word boundaries, not
/// anchors, so surrounding text does not prevent a match.
pub fn is_ipv4(input: &str) -> Result<bool> {
    guard::non_empty(input)?;

    Ok(ipv4_regex().is_match(input))
}

/// Check whether the input contains an IPv6 address.
///
/// Accepts the full 8-group form, `::` compression, IPv4-mapped
/// addresses, and link-local addresses with a zone suffix.
pub fn is_ipv6(input: &str) -> Result<bool> {
    guard::non_empty(input)?;

    Ok(ipv6_regex().is_match(input))
}

/// Check whether the whole input is a conventional email address.
///
/// Anchored: the entire string must be `local-part@domain`.
pub fn is_email(input: &str) -> Result<bool> {
    guard::non_empty(input)?;

    Ok(email_regex().is_match(input))
}
