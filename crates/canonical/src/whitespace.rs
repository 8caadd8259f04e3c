//! Whitespace normalization utilities.
//!
//! The highlighter rejoins tokens with single ASCII spaces, so the plain text
//! of any highlighted output is exactly [`join_tokens`] of its input. This is
//! lossy: runs of whitespace, tabs and newlines all collapse to one space.
//!
//! ```rust
//! use canonical::join_tokens;
//!
//! assert_eq!(join_tokens("  hello \n\n world  "), "hello world");
//! ```

use crate::token::tokens;

/// Join the tokens of `text` with single spaces, trimming both edges.
///
/// Returns an empty string for empty or whitespace-only input.
pub fn join_tokens(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    for token in tokens(text) {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(token);
    }
    joined
}
