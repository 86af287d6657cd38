//! Whitespace normalization

use std::sync::OnceLock;

use regex::Regex;

use super::error::Result;
use super::guard;

/// Matches a single whitespace token: CRLF first so it is consumed as one
/// unit, then space, LF, or tab.
static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Matches a run of one or more whitespace characters.
static RUN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\r\n|[ \n\t]").expect("Invalid whitespace pattern"))
}

fn run_regex() -> &'static Regex {
    RUN_PATTERN.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace run pattern"))
}

/// The canonical whitespace representation to normalize to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitespaceKind {
    Space,
    Newline,
    Tab,
}

impl WhitespaceKind {
    /// The literal representation written into the output.
    pub fn as_str(self) -> &'static str {
        match self {
            WhitespaceKind::Space => " ",
            WhitespaceKind::Newline => "\r\n",
            WhitespaceKind::Tab => "\t",
        }
    }
}

/// Replace every space, CRLF, LF, and tab with the target representation.
///
/// A single substitution pass over the whole input; replacement text is
/// never rescanned, so converting to tab cannot re-convert a tab that was
/// just written.
pub fn normalize_whitespace(input: &str, target: WhitespaceKind) -> Result<String> {
    guard::non_empty(input)?;

    Ok(token_regex().replace_all(input, target.as_str()).into_owned())
}

/// Collapse every run of whitespace into a single space character.
pub fn consolidate_spaces(input: &str) -> Result<String> {
    guard::non_empty(input)?;

    Ok(run_regex().replace_all(input, " ").into_owned())
}
