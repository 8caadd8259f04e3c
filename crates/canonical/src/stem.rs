//! Crude suffix-stripping stemmer.
//!
//! Stems are compared for exact string equality by the highlighter, so the
//! rule table below is ordered and first-match-wins. Reordering it (for
//! example checking `es` before `s`) silently changes which tokens match.

use crate::token::tokens;

/// One entry of the ordered suffix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Suffix to strip.
    pub suffix: &'static str,
    /// The lowercased word must be strictly longer than this many characters.
    pub min_len: usize,
}

impl SuffixRule {
    const fn new(suffix: &'static str) -> Self {
        Self {
            suffix,
            min_len: suffix.len() + 3,
        }
    }

    /// Strip the suffix from an already-lowercased word if the rule applies.
    pub fn apply<'a>(&self, word: &'a str) -> Option<&'a str> {
        if word.chars().count() > self.min_len {
            word.strip_suffix(self.suffix)
        } else {
            None
        }
    }
}

/// Suffix rules in priority order.
pub const SUFFIX_RULES: [SuffixRule; 7] = [
    SuffixRule::new("ing"),
    SuffixRule::new("ly"),
    SuffixRule::new("ed"),
    SuffixRule::new("s"),
    SuffixRule::new("er"),
    SuffixRule::new("est"),
    SuffixRule::new("es"),
];

/// Reduce a word to its crude root form.
///
/// The word is lowercased first; the first rule in [`SUFFIX_RULES`] that
/// applies is stripped. Words no rule applies to are returned lowercased.
pub fn stem(word: &str) -> String {
    let lower = word.to_lowercase();
    for rule in &SUFFIX_RULES {
        if let Some(root) = rule.apply(&lower) {
            return root.to_string();
        }
    }
    lower
}

/// Stems of every token of `text`, in order.
pub fn stem_all(text: &str) -> impl Iterator<Item = String> + '_ {
    tokens(text).map(stem)
}
