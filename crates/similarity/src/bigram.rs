//! Character bigram sets.
//!
//! A string of `L` characters yields at most `L - 1` bigrams (a sliding window
//! of two consecutive characters, step one); duplicates collapse. Characters
//! are Unicode scalar values, not bytes.

use fxhash::FxHashSet;

/// Set of overlapping two-character windows of a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigramSet {
    pairs: FxHashSet<(char, char)>,
}

impl BigramSet {
    /// Build the set over `text` as given. Callers lowercase first.
    pub fn new(text: &str) -> Self {
        let mut chars = text.chars();
        let mut pairs = FxHashSet::default();
        if let Some(mut prev) = chars.next() {
            pairs.reserve(text.len().saturating_sub(1));
            for ch in chars {
                pairs.insert((prev, ch));
                prev = ch;
            }
        }
        Self { pairs }
    }

    /// Number of distinct bigrams.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, first: char, second: char) -> bool {
        self.pairs.contains(&(first, second))
    }

    /// Size of the intersection with `other`.
    pub fn intersection_len(&self, other: &BigramSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .pairs
            .iter()
            .filter(|pair| large.pairs.contains(*pair))
            .count()
    }

    /// Dice's coefficient `2|A∩B| / (|A|+|B|)`.
    ///
    /// Two empty sets (both inputs at most one character long) give 0.0
    /// instead of dividing by zero.
    pub fn dice(&self, other: &BigramSet) -> f64 {
        let denominator = self.len() + other.len();
        if denominator == 0 {
            return 0.0;
        }
        (2 * self.intersection_len(other)) as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliding_window_collapses_duplicates() {
        let set = BigramSet::new("banana");
        // ba, an, na, an, na
        assert_eq!(set.len(), 3);
        assert!(set.contains('b', 'a'));
        assert!(set.contains('a', 'n'));
        assert!(set.contains('n', 'a'));
    }

    #[test]
    fn short_strings_have_no_bigrams() {
        assert!(BigramSet::new("").is_empty());
        assert!(BigramSet::new("x").is_empty());
        assert_eq!(BigramSet::new("xy").len(), 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let set = BigramSet::new("\u{e9}t\u{e9}");
        assert_eq!(set.len(), 2);
        assert!(set.contains('\u{e9}', 't'));
        assert!(set.contains('t', '\u{e9}'));
    }

    #[test]
    fn whitespace_is_part_of_bigrams() {
        let set = BigramSet::new("a b");
        assert!(set.contains('a', ' '));
        assert!(set.contains(' ', 'b'));
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = BigramSet::new("night");
        let b = BigramSet::new("nacht");
        // only "ht" is shared
        assert_eq!(a.intersection_len(&b), 1);
        assert_eq!(b.intersection_len(&a), 1);
    }

    #[test]
    fn dice_guards_empty_denominator() {
        let a = BigramSet::new("a");
        let b = BigramSet::new("b");
        assert_eq!(a.dice(&b), 0.0);
    }

    #[test]
    fn dice_known_value() {
        let a = BigramSet::new("night");
        let b = BigramSet::new("nacht");
        // 2 * 1 / (4 + 4)
        assert!((a.dice(&b) - 0.25).abs() < f64::EPSILON);
    }
}
