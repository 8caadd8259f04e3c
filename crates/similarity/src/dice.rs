use crate::bigram::BigramSet;

/// A lowercased string with its bigram set, built once and compared many
/// times.
#[derive(Debug, Clone, Default)]
pub struct BigramProfile {
    lowered: String,
    bigrams: BigramSet,
}

impl BigramProfile {
    /// Lowercase `text` and build its bigram set.
    pub fn new(text: &str) -> Self {
        Self::from_lowered(text.to_lowercase())
    }

    /// Build a profile from text the caller has already lowercased.
    pub fn from_lowered(lowered: String) -> Self {
        let bigrams = BigramSet::new(&lowered);
        Self { lowered, bigrams }
    }

    pub fn text(&self) -> &str {
        &self.lowered
    }

    /// Score this profile against another; see [`similarity`].
    pub fn similarity(&self, other: &BigramProfile) -> f64 {
        if self.lowered == other.lowered {
            return 1.0;
        }
        if self.lowered.is_empty() || other.lowered.is_empty() {
            return 0.0;
        }
        self.bigrams.dice(&other.bigrams)
    }
}

/// Case-insensitive Dice similarity over character bigrams, in `[0, 1]`.
///
/// - equal strings (including two empty strings): 1.0
/// - otherwise, either string empty: 0.0
/// - otherwise `2|A∩B| / (|A|+|B|)` over the lowercased bigram sets, with
///   0.0 when both sets are empty (single-character inputs)
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    BigramProfile::new(a).similarity(&BigramProfile::new(b))
}
