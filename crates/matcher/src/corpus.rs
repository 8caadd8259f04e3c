use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Reference passages shipped with the engine. Their order defines the `id`
/// reported in [`SourceMatch`](crate::SourceMatch).
pub const REFERENCE_TEXTS: [&str; 5] = [
    "Artificial intelligence is the simulation of human intelligence processes by machines, especially computer systems. These processes include learning, reasoning, and self-correction.",
    "Machine learning is a subset of artificial intelligence that provides systems the ability to automatically learn and improve from experience without being explicitly programmed.",
    "Natural Language Processing is a branch of artificial intelligence that deals with the interaction between computers and humans using natural language.",
    "Deep learning is part of a broader family of machine learning methods based on artificial neural networks with representation learning.",
    "Computer vision is an interdisciplinary field that deals with how computers can gain high-level understanding from digital images or videos.",
];

static BUILTIN: Lazy<ReferenceCorpus> = Lazy::new(|| ReferenceCorpus {
    passages: REFERENCE_TEXTS.iter().map(|p| p.to_string()).collect(),
});

/// Ordered, immutable set of reference passages.
///
/// Built once at start-up and only read afterwards, so a single instance can
/// be shared across threads behind an `Arc` or a `'static` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCorpus {
    passages: Vec<String>,
}

impl ReferenceCorpus {
    /// Build a corpus from caller-supplied passages.
    pub fn new<I, S>(passages: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let passages: Vec<String> = passages.into_iter().map(Into::into).collect();
        if passages.is_empty() {
            return Err(MatchError::EmptyCorpus);
        }
        Ok(Self { passages })
    }

    /// The built-in corpus of [`REFERENCE_TEXTS`].
    pub fn builtin() -> &'static ReferenceCorpus {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Passage at `id`, if any.
    pub fn get(&self, id: usize) -> Option<&str> {
        self.passages.get(id).map(String::as_str)
    }

    /// `(id, passage)` pairs in corpus order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &str)> + '_ {
        self.passages
            .iter()
            .enumerate()
            .map(|(id, p)| (id, p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_reference_texts() {
        let corpus = ReferenceCorpus::builtin();
        assert_eq!(corpus.len(), REFERENCE_TEXTS.len());
        for (id, passage) in corpus.iter() {
            assert_eq!(passage, REFERENCE_TEXTS[id]);
        }
        assert!(corpus.get(REFERENCE_TEXTS.len()).is_none());
    }

    #[test]
    fn empty_corpus_rejected() {
        let err = ReferenceCorpus::new(Vec::<String>::new()).expect_err("empty corpus");
        assert_eq!(err, MatchError::EmptyCorpus);
    }

    #[test]
    fn custom_corpus_keeps_order() {
        let corpus = ReferenceCorpus::new(["first", "second", "third"]).expect("corpus");
        let ids: Vec<(usize, &str)> = corpus.iter().collect();
        assert_eq!(ids, vec![(0, "first"), (1, "second"), (2, "third")]);
        assert!(!corpus.is_empty());
    }
}
