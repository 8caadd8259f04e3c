use serde::{Deserialize, Serialize};

/// A maximal run of non-whitespace characters with its UTF-8 byte offsets in
/// the text it was cut from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text, exactly as it appears in the input.
    pub text: String,
    /// Byte offset (inclusive) in the input text.
    pub start: usize,
    /// Byte offset (exclusive) in the input text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Token delimiter: Unicode whitespace plus the byte-order mark (U+FEFF),
/// excluding NEL (U+0085).
pub fn is_delimiter(ch: char) -> bool {
    match ch {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => ch.is_whitespace(),
    }
}

/// Borrowing iterator over the tokens of a text.
///
/// Yields `(start, slice)` pairs split on [`is_delimiter`]; never produces
/// empty tokens.
#[derive(Debug, Clone)]
pub struct TokenSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for TokenSpans<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let skipped = rest.len() - rest.trim_start_matches(is_delimiter).len();
        let start = self.pos + skipped;
        if start >= self.text.len() {
            self.pos = self.text.len();
            return None;
        }

        let tail = &self.text[start..];
        let len = tail
            .char_indices()
            .find(|(_, ch)| is_delimiter(*ch))
            .map(|(idx, _)| idx)
            .unwrap_or(tail.len());

        self.pos = start + len;
        Some((start, &tail[..len]))
    }
}

/// Iterate over token spans without allocating.
pub fn token_spans(text: &str) -> TokenSpans<'_> {
    TokenSpans { text, pos: 0 }
}

/// Iterate over token slices without allocating.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    token_spans(text).map(|(_, slice)| slice)
}

/// Split raw text on runs of whitespace.
///
/// Leading and trailing whitespace produce no tokens and the original order
/// is preserved. Empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<Token> {
    token_spans(text)
        .map(|(start, slice)| Token {
            text: slice.to_string(),
            start,
            end: start + slice.len(),
        })
        .collect()
}
