//! Tokenizer and stemmer for the plagscan engine.
//!
//! ## What we do
//!
//! - Split raw text into whitespace-delimited tokens, keeping byte offsets
//! - Reduce tokens to crude stems with an ordered suffix table
//! - Rejoin tokens with single spaces (the plain text of highlighted output)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. Every function here depends only on
//! its input, so callers may use them from any number of threads.
//!
//! ## Invariants worth knowing
//!
//! - Tokens are never empty and are emitted in input order
//! - Punctuation is not stripped; it travels with the token it touches
//! - Stemming lowercases first and strips at most one suffix

mod stem;
mod token;
mod whitespace;

pub use crate::stem::{stem, stem_all, SuffixRule, SUFFIX_RULES};
pub use crate::token::{is_delimiter, token_spans, tokenize, tokens, Token, TokenSpans};
pub use crate::whitespace::join_tokens;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_and_stems_line_up() {
        let text = "Machine learning  provides systems\nthe ability";
        let toks = tokenize(text);
        let stems: Vec<String> = stem_all(text).collect();
        assert_eq!(toks.len(), stems.len());
        for (tok, st) in toks.iter().zip(stems.iter()) {
            assert_eq!(stem(&tok.text), *st);
        }
        assert_eq!(stems, vec!["machine", "learn", "provide", "system", "the", "ability"]);
    }

    #[test]
    fn join_matches_token_texts() {
        let text = "\tDeep   learning is\npart of ";
        let from_tokens: Vec<String> = tokenize(text).into_iter().map(|t| t.text).collect();
        assert_eq!(join_tokens(text), from_tokens.join(" "));
    }
}
