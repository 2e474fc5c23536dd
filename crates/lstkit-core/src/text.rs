//! Line utilities.
//!
//! Conditional-region folding works on lines split at `\n` only. A `\r`
//! before the newline stays part of the line, so splitting and re-joining
//! with `\n` reproduces CRLF text exactly.

/// Split on `\n`. `n` newlines always give `n + 1` lines.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}
