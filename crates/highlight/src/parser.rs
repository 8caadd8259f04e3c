//! Turns highlighted text back into plain and highlighted spans.
//!
//! The scanner has two states. In `Plain` it buffers characters until a `<`.
//! In `InTag` it collects everything up to the next `>`; if that tag is exactly
//! [`HIGHLIGHT_START`] and a [`HIGHLIGHT_END`] follows somewhere later, the
//! content in between becomes one highlighted span, taken verbatim (no nested
//! tag handling). Anything else, including an open marker with no closing
//! marker and a `<` never closed by `>`, goes back into the buffer unchanged.

use serde::{Deserialize, Serialize};

use crate::{HIGHLIGHT_END, HIGHLIGHT_START};

/// A run of text in the parsed output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Plain(String),
    Highlighted(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Highlighted(text) => text,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Plain,
    /// Byte offset of the `<` that opened the tag.
    InTag { start: usize },
}

/// Split `input` into plain and highlighted segments.
///
/// Adjacent plain text is merged into a single segment, and empty plain
/// segments are never produced.
pub fn parse_markers(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut state = ScanState::Plain;
    let mut pos = 0usize;

    while let Some(ch) = input[pos..].chars().next() {
        let next = pos + ch.len_utf8();
        match (state, ch) {
            (ScanState::Plain, '<') => {
                state = ScanState::InTag { start: pos };
                pos = next;
            }
            (ScanState::Plain, _) => {
                buffer.push(ch);
                pos = next;
            }
            (ScanState::InTag { start }, '<') => {
                // The pending `<...` never closed; it is literal text.
                buffer.push_str(&input[start..pos]);
                state = ScanState::InTag { start: pos };
                pos = next;
            }
            (ScanState::InTag { start }, '>') => {
                let tag = &input[start..next];
                state = ScanState::Plain;
                pos = next;

                if tag == HIGHLIGHT_START {
                    if let Some(len) = input[pos..].find(HIGHLIGHT_END) {
                        flush(&mut buffer, &mut segments);
                        segments.push(Segment::Highlighted(input[pos..pos + len].to_string()));
                        pos += len + HIGHLIGHT_END.len();
                        continue;
                    }
                }
                buffer.push_str(tag);
            }
            (ScanState::InTag { .. }, _) => {
                pos = next;
            }
        }
    }

    if let ScanState::InTag { start } = state {
        buffer.push_str(&input[start..]);
    }
    flush(&mut buffer, &mut segments);
    segments
}

fn flush(buffer: &mut String, segments: &mut Vec<Segment>) {
    if !buffer.is_empty() {
        segments.push(Segment::Plain(std::mem::take(buffer)));
    }
}

/// Concatenate every segment's text, dropping highlight boundaries.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}
