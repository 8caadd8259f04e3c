use std::cmp::Ordering;

use similarity::BigramProfile;
use tracing::{debug, trace};

use crate::corpus::ReferenceCorpus;
use crate::types::{ScoringProgress, SourceMatch};


/// Score `text` against every passage and return matches ranked by
/// descending score. Equal scores keep corpus order.
pub fn rank_against_corpus(text: &str, corpus: &ReferenceCorpus) -> Vec<SourceMatch> {
    rank_with_progress(text, corpus, |_| {})
}

/// Like [`rank_against_corpus`], calling `on_progress` after each passage is
/// scored.
///
/// The query is lowercased and its bigram set built once per call; each
/// passage is lowercased and compared in turn, which is equivalent to calling
/// [`similarity::similarity`] on every pair.
pub fn rank_with_progress<F>(
    text: &str,
    corpus: &ReferenceCorpus,
    mut on_progress: F,
) -> Vec<SourceMatch>
where
    F: FnMut(ScoringProgress),
{
    let query = BigramProfile::new(text);
    let total = corpus.len();
    let mut matches = Vec::with_capacity(total);

    for (id, passage) in corpus.iter() {
        let score = query.similarity(&BigramProfile::new(passage));
        trace!(id, score, "scored reference passage");
        matches.push(SourceMatch {
            id,
            score,
            text: passage.to_string(),
        });
        on_progress(ScoringProgress {
            scored: id + 1,
            total,
        });
    }

    // `sort_by` is stable, which keeps corpus order among ties.
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug!(
        corpus_len = total,
        best_id = matches.first().map(|m| m.id),
        best_score = matches.first().map(|m| m.score),
        "ranked text against reference corpus"
    );
    matches
}
