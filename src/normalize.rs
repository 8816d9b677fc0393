//! Answer normalization.
//!
//! Expected answers and typed answers go through the same function so that
//! comparison is an exact match on the canonical form.

/// Trims surrounding whitespace (line terminator included) and folds to lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
