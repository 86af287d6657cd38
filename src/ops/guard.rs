//! Input guard clauses

use super::error::{Result, StringexError};

/// Reject empty string arguments before an operation does any work.
///
/// Every public operation runs this on each of its string parameters.
pub(crate) fn non_empty(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(StringexError::EmptyInput);
    }
    Ok(())
}
