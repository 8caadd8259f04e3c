//! Highlighting of suspected overlap.
//!
//! [`build_highlighted_text`] wraps tokens of the submitted text whose stems
//! occur in any high-similarity reference passage in [`HIGHLIGHT_START`] /
//! [`HIGHLIGHT_END`]. [`parse_markers`] is the inverse used by renderers: it
//! turns the marked-up string back into [`Segment`]s without ever dropping
//! user text, even when the markup is malformed.
//!
//! ```
//! use highlight::{build_highlighted_text, parse_markers, plain_text};
//! use matcher::SourceMatch;
//!
//! let ranked = vec![SourceMatch { id: 0, score: 0.9, text: "deep learning".into() }];
//! let marked = build_highlighted_text("Deep  thinking", &ranked);
//! assert_eq!(marked, "<mark>Deep</mark> thinking");
//!
//! let segments = parse_markers(&marked);
//! assert!(segments[0].is_highlighted());
//! assert_eq!(plain_text(&segments), "Deep thinking");
//! ```

mod builder;
mod parser;

/// Opens a highlighted span.
pub const HIGHLIGHT_START: &str = "<mark>";
/// Closes a highlighted span.
pub const HIGHLIGHT_END: &str = "</mark>";

pub use crate::builder::{
    build_highlighted_text, build_highlighted_text_with_threshold, DEFAULT_HIGHLIGHT_THRESHOLD,
};
pub use crate::parser::{parse_markers, plain_text, Segment};
