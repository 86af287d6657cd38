//! Levenshtein distance metrics

use log::trace;

use super::error::Result;
use super::guard;

/// Compute the Levenshtein edit distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions,
/// and substitutions (unit cost each) needed to turn `a` into `b`,
/// measured over Unicode scalar values.
///
/// # Errors
/// Returns `EmptyInput` if either argument is empty.
pub fn levenshtein_distance(a: &str, b: &str) -> Result<usize> {
    guard::non_empty(a)?;
    guard::non_empty(b)?;

    let source: Vec<char> = a.chars().collect();
    let target: Vec<char> = b.chars().collect();
    trace!(
        "computing edit distance over {}x{} chars",
        source.len(),
        target.len()
    );

    // Two-row dynamic programming: prev holds distances for the previous
    // source prefix, curr is filled for the current one.
    let mut prev: Vec<usize> = (0..=target.len()).collect();
    let mut curr: Vec<usize> = vec![0; target.len() + 1];

    for (i, sc) in source.iter().enumerate() {
        curr[0] = i + 1;
        for (j, tc) in target.iter().enumerate() {
            let substitution_cost = usize::from(sc != tc);
            curr[j + 1] = (prev[j] + substitution_cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[target.len()])
}

/// Express the Levenshtein distance as a percentage of the longer input.
///
/// `100 * distance / max(chars(a), chars(b))`. Because both arguments are
/// rejected when empty, the divisor is always at least 1.
///
/// # Errors
/// Returns `EmptyInput` if either argument is empty.
pub fn levenshtein_percentage(a: &str, b: &str) -> Result<f64> {
    let distance = levenshtein_distance(a, b)?;
    let base = a.chars().count().max(b.chars().count());

    Ok(100.0 * (distance as f64 / base as f64))
}
